//! The fixed column contract of the alumni table.

/// One of the seven columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Name,
    Class,
    Family,
    Industry,
    Company,
    Title,
    Linkedin,
}

impl ColumnId {
    /// All columns in the order they are laid out.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Class,
        Self::Family,
        Self::Industry,
        Self::Company,
        Self::Title,
        Self::Linkedin,
    ];

    /// Header text shown above the column.
    pub const fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Class => "Class",
            Self::Family => "Family",
            Self::Industry => "Role/Industry",
            Self::Company => "Company",
            Self::Title => "Title",
            Self::Linkedin => "LinkedIn",
        }
    }

    /// Only the Name header toggles sorting.
    pub const fn is_sortable(self) -> bool {
        matches!(self, Self::Name)
    }
}
