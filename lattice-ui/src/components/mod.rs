//! Component catalog.

pub mod accordion;
pub mod avatar;
pub mod branding;
pub mod button;
pub mod chip;
pub mod dot_status;
pub mod dropdown;
pub mod file_upload;
pub mod icons;
pub mod pill_toggle;
pub mod radio;
pub mod slider;
pub mod step_indicator;
pub mod tabs;
pub mod text_input;
pub mod toast;
pub mod toggle;

pub use accordion::{Accordion, AccordionItem};
pub use avatar::{Avatar, AvatarSize, AvatarStatus};
pub use branding::{Branding, BrandingBrand, BrandingSize};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use chip::{Chip, ChipSize};
pub use dot_status::{DotStatus, DotStatusAppearance, DotStatusSize};
pub use dropdown::{Dropdown, DropdownSize, DropdownState};
pub use file_upload::{FileUpload, FileUploadState};
pub use icons::{
    CaretDownIcon, CheckCircleIcon, CheckIcon, ChevronDownIcon, CloseIcon, DotsVerticalIcon,
    MenuIcon, SearchIcon, UploadIcon, XIcon,
};
pub use pill_toggle::PillToggle;
pub use radio::{Radio, RadioGroup};
pub use slider::Slider;
pub use step_indicator::{
    StepIndicator, StepIndicatorItem, StepOrientation, StepPosition, StepSize, StepStatus,
};
pub use tabs::{TabItem, Tabs, TabsAppearance};
pub use text_input::{TextInput, TextInputSize, TextInputState, TextInputVariant};
pub use toast::{Toast, ToastActions, ToastAppearance, ToastSize};
pub use toggle::{Toggle, ToggleSize, ToggleState};
