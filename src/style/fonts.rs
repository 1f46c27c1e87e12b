/// Generic family used as a fallback when a named catalog font is not installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericFamily {
    /// Serif faces.
    Serif,
    /// Sans-serif faces.
    SansSerif,
    /// Fixed-pitch faces.
    Monospace,
    /// Script / handwriting faces.
    Cursive,
    /// Decorative display faces.
    Fantasy,
}

/// One entry of the font catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FontChoice {
    /// Preferred family name.
    pub family: &'static str,
    /// Generic fallback family.
    pub generic: GenericFamily,
    /// CSS-style weight (400 regular, 700 bold).
    pub weight: u16,
}

/// The fixed catalog the sampler draws from.
pub const FONT_CATALOG: [FontChoice; 8] = [
    FontChoice {
        family: "Impact",
        generic: GenericFamily::SansSerif,
        weight: 400,
    },
    FontChoice {
        family: "Georgia",
        generic: GenericFamily::Serif,
        weight: 700,
    },
    FontChoice {
        family: "Courier New",
        generic: GenericFamily::Monospace,
        weight: 700,
    },
    FontChoice {
        family: "Trebuchet MS",
        generic: GenericFamily::SansSerif,
        weight: 700,
    },
    FontChoice {
        family: "Verdana",
        generic: GenericFamily::SansSerif,
        weight: 700,
    },
    FontChoice {
        family: "Times New Roman",
        generic: GenericFamily::Serif,
        weight: 700,
    },
    FontChoice {
        family: "Comic Sans MS",
        generic: GenericFamily::Cursive,
        weight: 700,
    },
    FontChoice {
        family: "Papyrus",
        generic: GenericFamily::Fantasy,
        weight: 400,
    },
];
