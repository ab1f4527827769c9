//! Brand logo lockup.

use std::sync::LazyLock;

use dioxus::prelude::*;
use lattice_style::{StyleResolver, StyleTable, VariantKey};

static ROOT: LazyLock<StyleTable> = LazyLock::new(|| {
    StyleTable::builder()
        .base("inline-flex items-center justify-center")
        .axis(
            "size",
            [
                ("sm", "h-[40px] w-[100px]"),
                ("md", "h-[80px] w-[200px]"),
                ("lg", "h-[120px] w-[300px]"),
            ],
        )
        .build()
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BrandingBrand {
    #[default]
    Wireframe,
    Connect,
    Locumsmart,
    Modio,
    Myweatherby,
    Mycomphealth,
    DesignSystem,
}

impl BrandingBrand {
    /// Logo asset path served alongside the app bundle.
    pub fn logo_src(self) -> &'static str {
        match self {
            BrandingBrand::Wireframe => "/assets/logos/wireframe.svg",
            BrandingBrand::Connect => "/assets/logos/connect.svg",
            BrandingBrand::Locumsmart => "/assets/logos/locumsmart.svg",
            BrandingBrand::Modio => "/assets/logos/modio.svg",
            BrandingBrand::Myweatherby => "/assets/logos/myweatherby.svg",
            BrandingBrand::Mycomphealth => "/assets/logos/mycomphealth.svg",
            BrandingBrand::DesignSystem => "/assets/logos/design-system.svg",
        }
    }

    fn default_alt(self) -> &'static str {
        match self {
            BrandingBrand::Wireframe => "Wireframe logo",
            BrandingBrand::Connect => "Connect logo",
            BrandingBrand::Locumsmart => "Locumsmart logo",
            BrandingBrand::Modio => "Modio logo",
            BrandingBrand::Myweatherby => "Myweatherby logo",
            BrandingBrand::Mycomphealth => "Mycomphealth logo",
            BrandingBrand::DesignSystem => "Design system logo",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BrandingSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl VariantKey for BrandingSize {
    fn variant_key(&self) -> &'static str {
        match self {
            BrandingSize::Sm => "sm",
            BrandingSize::Md => "md",
            BrandingSize::Lg => "lg",
        }
    }
}

#[component]
pub fn Branding(
    brand: BrandingBrand,
    #[props(default)] size: BrandingSize,
    /// Alt text override for the logo image.
    #[props(default)]
    alt: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let root = StyleResolver::new(&ROOT)
        .base()
        .axis("size", &size)
        .class(class.as_deref())
        .resolve();
    let alt = alt.as_deref().unwrap_or(brand.default_alt());

    rsx! {
        div { class: "{root}",
            img {
                src: brand.logo_src(),
                alt: "{alt}",
                class: "h-full w-full object-contain",
            }
        }
    }
}
