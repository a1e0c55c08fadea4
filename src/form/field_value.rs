#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Options are `(value, label)` pairs
    Select { options: Vec<(String, String)>, selected: usize },
}

impl FieldValue {
    pub fn select(options: Vec<(String, String)>) -> Self {
        Self::Select { options, selected: 0 }
    }

    /// The submitted value: the text, or the selected option's value
    pub fn value(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Select { options, selected } => {
                options.get(*selected).map(|(v, _)| v.as_str()).unwrap_or("")
            }
        }
    }

    pub fn as_display_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Select { options, selected } => {
                options.get(*selected).map(|(_, l)| l.clone()).unwrap_or_default()
            }
        }
    }

    /// Select the option carrying `value`. Returns false if there is none.
    pub fn select_value(&mut self, value: &str) -> bool {
        if let Self::Select { options, selected } = self {
            if let Some(idx) = options.iter().position(|(v, _)| v == value) {
                *selected = idx;
                return true;
            }
        }
        false
    }

    pub fn cycle(&mut self, forward: bool) {
        if let Self::Select { options, selected } = self {
            if options.is_empty() {
                return;
            }
            if forward {
                *selected = (*selected + 1) % options.len();
            } else if *selected > 0 {
                *selected -= 1;
            } else {
                *selected = options.len() - 1;
            }
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select { .. })
    }
}
