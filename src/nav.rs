#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Summary,
    Skills,
    Education,
    Projects,
    Volunteering,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Hero,
        Self::Summary,
        Self::Skills,
        Self::Education,
        Self::Projects,
        Self::Volunteering,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Summary => "summary",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Volunteering => "volunteering",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Summary => "Summary",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Volunteering => "Volunteering",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Hero => "⌂",
            Self::Summary => "◉",
            Self::Skills => "</>",
            Self::Education => "🎓",
            Self::Projects => "▣",
            Self::Volunteering => "❤",
        }
    }
}

pub fn locate_active(
    offsets: &[(SectionId, Option<f64>)],
    scroll_y: f64,
    lookahead: f64,
) -> Option<SectionId> {
    let probe = scroll_y + lookahead;

    offsets
        .iter()
        .rev()
        .find(|(_, top)| top.is_some_and(|top| top <= probe))
        .map(|(id, _)| *id)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSectionTracker {
    active: SectionId,
    lookahead: f64,
}

impl ActiveSectionTracker {
    pub fn new(lookahead: f64) -> Self {
        Self {
            active: SectionId::Hero,
            lookahead,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Returns `true` when the active section changed. With no match the
    /// previous section is kept.
    pub fn update(&mut self, offsets: &[(SectionId, Option<f64>)], scroll_y: f64) -> bool {
        match locate_active(offsets, scroll_y, self.lookahead) {
            Some(found) if found != self.active => {
                self.active = found;
                true
            }
            _ => false,
        }
    }
}
