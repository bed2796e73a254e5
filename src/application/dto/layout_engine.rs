/// Graphviz layout engine used to place nodes and edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutEngine {
    /// Hierarchical layout (default)
    #[default]
    Dot,
    Neato,
    Fdp,
    Sfdp,
    Circo,
    Twopi,
    Osage,
    Patchwork,
}

impl LayoutEngine {
    pub const ALL: [LayoutEngine; 8] = [
        LayoutEngine::Dot,
        LayoutEngine::Neato,
        LayoutEngine::Fdp,
        LayoutEngine::Sfdp,
        LayoutEngine::Circo,
        LayoutEngine::Twopi,
        LayoutEngine::Osage,
        LayoutEngine::Patchwork,
    ];

    /// Name passed to Graphviz via `-K`
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutEngine::Dot => "dot",
            LayoutEngine::Neato => "neato",
            LayoutEngine::Fdp => "fdp",
            LayoutEngine::Sfdp => "sfdp",
            LayoutEngine::Circo => "circo",
            LayoutEngine::Twopi => "twopi",
            LayoutEngine::Osage => "osage",
            LayoutEngine::Patchwork => "patchwork",
        }
    }
}

impl std::str::FromStr for LayoutEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == lowered)
            .ok_or_else(|| {
                format!(
                    "Invalid layout engine: {}. Supported engines: {}",
                    s,
                    Self::ALL.map(LayoutEngine::as_str).join(", ")
                )
            })
    }
}

impl std::fmt::Display for LayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
