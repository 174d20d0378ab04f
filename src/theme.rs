use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_weight: u16,
    pub background: String,
    pub palette: Vec<String>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "Pretendard, \"Noto Sans KR\", \"Apple SD Gothic Neo\", sans-serif"
                .to_string(),
            font_weight: 800,
            background: "#F5F7FF".to_string(),
            palette: [
                "#DC2626", "#2563EB", "#16A34A", "#9333EA", "#EA580C", "#DB2777", "#4F46E5",
                "#0D9488",
            ]
            .iter()
            .map(|color| color.to_string())
            .collect(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#0F172A".to_string(),
            palette: [
                "#F87171", "#60A5FA", "#4ADE80", "#C084FC", "#FB923C", "#F472B6", "#818CF8",
                "#2DD4BF",
            ]
            .iter()
            .map(|color| color.to_string())
            .collect(),
            ..Self::light()
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Palette entry for the `index`-th rendered keyword, cycling.
    pub fn color_for(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "#000000";
        }
        &self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
