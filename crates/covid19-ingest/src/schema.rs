use covid19_reshape::ColumnKind;

/// One expected source column and the type its cells parse to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaColumn {
    pub name: String,
    pub kind: ColumnKind,
}

/// The columns a source CSV is expected to carry.
///
/// Column order here decides column order in the parsed table; extra source
/// columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSchema {
    pub columns: Vec<SchemaColumn>,
}

impl SourceSchema {
    pub fn new() -> Self {
        SourceSchema::default()
    }

    pub fn date(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::Date)
    }

    pub fn text(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::Text)
    }

    pub fn number(self, name: impl Into<String>) -> Self {
        self.column(name, ColumnKind::Number)
    }

    fn column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.columns.push(SchemaColumn {
            name: name.into(),
            kind,
        });
        self
    }
}
