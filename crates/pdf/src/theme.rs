//! PDF colour themes.
//!
//! Themes are immutable colour palettes selected per export; they are never
//! persisted with a briefing. The palette set follows common UI theme
//! families so an exported document can match the reader's preference.

/// A colour palette for the paginated document renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfTheme {
    pub name: &'static str,
    /// Page background, hex
    pub background: &'static str,
    /// Body text colour, hex
    pub text: &'static str,
    /// Heading colour, hex
    pub headings: &'static str,
    /// Accent used for header text, dividers, and page numbers, hex
    pub accent: &'static str,
    /// Divider/border colour, hex
    pub borders: &'static str,
    pub description: &'static str,
}

impl PdfTheme {
    /// Whether the page needs a background fill before drawing.
    pub fn has_tinted_background(&self) -> bool {
        !self.background.eq_ignore_ascii_case("#ffffff")
    }
}

/// Converts a `#rrggbb` hex colour to an RGB byte triple.
///
/// Malformed input degrades to black rather than failing the export.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let value = hex.strip_prefix('#').unwrap_or(hex);
    match u32::from_str_radix(value, 16) {
        Ok(packed) if value.len() == 6 => (
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        ),
        _ => (0, 0, 0),
    }
}

/// The built-in theme palette.
pub static PDF_THEMES: &[PdfTheme] = &[
    PdfTheme {
        name: "light",
        background: "#ffffff",
        text: "#1f2937",
        headings: "#111827",
        accent: "#3b82f6",
        borders: "#e5e7eb",
        description: "Clean light theme with black text",
    },
    PdfTheme {
        name: "dark",
        background: "#1d232a",
        text: "#e5e7eb",
        headings: "#f3f4f6",
        accent: "#661AE6",
        borders: "#374151",
        description: "Dark theme with light text",
    },
    PdfTheme {
        name: "cupcake",
        background: "#faf7f5",
        text: "#291334",
        headings: "#4b5563",
        accent: "#ef9fbc",
        borders: "#e5dad2",
        description: "Pastel colors with pink accents",
    },
    PdfTheme {
        name: "bumblebee",
        background: "#ffffff",
        text: "#181830",
        headings: "#000000",
        accent: "#f5d60a",
        borders: "#e5e7eb",
        description: "Black and yellow theme",
    },
    PdfTheme {
        name: "emerald",
        background: "#ffffff",
        text: "#333c4d",
        headings: "#107568",
        accent: "#66CC8A",
        borders: "#e5e7eb",
        description: "Green-based theme with clean look",
    },
    PdfTheme {
        name: "corporate",
        background: "#ffffff",
        text: "#1d232a",
        headings: "#1e293b",
        accent: "#4b6bfb",
        borders: "#cbd5e1",
        description: "Professional blue and white theme",
    },
    PdfTheme {
        name: "synthwave",
        background: "#2d1b69",
        text: "#f9f7fd",
        headings: "#f9f7fd",
        accent: "#e779c1",
        borders: "#4a3c90",
        description: "Retrowave with bright pink and purple",
    },
    PdfTheme {
        name: "retro",
        background: "#e8e2d6",
        text: "#40342c",
        headings: "#272625",
        accent: "#ef8464",
        borders: "#d3cabd",
        description: "Vintage theme with warm, earthy tones",
    },
    PdfTheme {
        name: "cyberpunk",
        background: "#ffee00",
        text: "#140741",
        headings: "#000000",
        accent: "#ff0055",
        borders: "#ffdd00",
        description: "Bright yellow with neon pink accents",
    },
    PdfTheme {
        name: "valentine",
        background: "#ffdbe7",
        text: "#4b384c",
        headings: "#4b384c",
        accent: "#e96d9a",
        borders: "#f5c8da",
        description: "Pink theme with soft colors",
    },
    PdfTheme {
        name: "halloween",
        background: "#171618",
        text: "#f7f5f2",
        headings: "#f7f5f2",
        accent: "#ff7a1a",
        borders: "#2e2c2f",
        description: "Dark theme with orange accents",
    },
    PdfTheme {
        name: "lofi",
        background: "#ffffff",
        text: "#1f2937",
        headings: "#000000",
        accent: "#0d0d0d",
        borders: "#e5e7eb",
        description: "Monochrome black and white theme",
    },
    PdfTheme {
        name: "dracula",
        background: "#282a36",
        text: "#f8f8f2",
        headings: "#ff79c6",
        accent: "#bd93f9",
        borders: "#44475a",
        description: "Dark theme with vivid purple and pink",
    },
    PdfTheme {
        name: "business",
        background: "#1C212B",
        text: "#D1D5DB",
        headings: "#ffffff",
        accent: "#4891EB",
        borders: "#374151",
        description: "Dark business theme with blue accents",
    },
    PdfTheme {
        name: "night",
        background: "#0c1222",
        text: "#e4e7ec",
        headings: "#f0f1f4",
        accent: "#39b5fd",
        borders: "#192032",
        description: "Dark blue theme with bright accents",
    },
    PdfTheme {
        name: "coffee",
        background: "#20161f",
        text: "#e2d6cf",
        headings: "#fbf2ea",
        accent: "#dc944c",
        borders: "#362c34",
        description: "Warm dark brown theme with coffee accents",
    },
];

/// Looks up a theme by name, falling back to the first (light) theme.
pub fn theme_by_name(name: &str) -> &'static PdfTheme {
    PDF_THEMES
        .iter()
        .find(|theme| theme.name == name)
        .unwrap_or(&PDF_THEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#3b82f6"), (0x3b, 0x82, 0xf6));
        assert_eq!(hex_to_rgb("ffffff"), (255, 255, 255));
    }

    #[test]
    fn malformed_hex_degrades_to_black() {
        assert_eq!(hex_to_rgb("#zzz"), (0, 0, 0));
        assert_eq!(hex_to_rgb("#fff"), (0, 0, 0));
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        assert_eq!(theme_by_name("does-not-exist").name, "light");
        assert_eq!(theme_by_name("dracula").name, "dracula");
    }

    #[test]
    fn only_white_backgrounds_skip_the_fill() {
        assert!(!theme_by_name("light").has_tinted_background());
        assert!(theme_by_name("dark").has_tinted_background());
    }
}
