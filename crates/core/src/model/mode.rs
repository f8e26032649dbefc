/// Whether resource links open the detail view or the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::View => Self::Edit,
            Self::Edit => Self::View,
        }
    }

    #[must_use]
    pub fn is_view(self) -> bool {
        matches!(self, Self::View)
    }
}
