/// Element kind. Determines the display value an element has when no
/// explicit display is set on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Form,
    Input,
    Button,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell,
}

impl Tag {
    /// The display value of an element of this kind without an explicit display.
    pub fn default_display(self) -> Display {
        match self {
            Tag::Div | Tag::Form => Display::Block,
            Tag::Span | Tag::Input | Tag::Button => Display::Inline,
            Tag::Table => Display::Table,
            Tag::TableHead => Display::TableHeaderGroup,
            Tag::TableBody => Display::TableRowGroup,
            Tag::TableRow => Display::TableRow,
            Tag::TableCell => Display::TableCell,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Form => "form",
            Tag::Input => "input",
            Tag::Button => "button",
            Tag::Table => "table",
            Tag::TableHead => "thead",
            Tag::TableBody => "tbody",
            Tag::TableRow => "tr",
            Tag::TableCell => "td",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Inline,
    Table,
    TableHeaderGroup,
    TableRowGroup,
    TableRow,
    TableCell,
}

impl Display {
    pub fn is_hidden(self) -> bool {
        self == Display::None
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Inline => "inline",
            Display::Table => "table",
            Display::TableHeaderGroup => "table-header-group",
            Display::TableRowGroup => "table-row-group",
            Display::TableRow => "table-row",
            Display::TableCell => "table-cell",
        }
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}
