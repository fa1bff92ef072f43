//! Load and save knobs for property documents

/// Controls how a document is read into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Keep XML comments as nodes so they survive a save
    pub keep_comments: bool,
    /// Keep whitespace between elements so the original layout survives a
    /// save. Text inside leaf elements such as `<value>` is always kept.
    pub keep_whitespace: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            keep_comments: true,
            keep_whitespace: true,
        }
    }
}

/// Controls how a document is written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Re-indent the whole document
    pub indent: bool,
    /// Emit the `<?xml version="1.0" encoding="UTF-8"?>` header
    pub write_declaration: bool,
    /// Write into a sibling temp file and rename it over the target
    pub atomic: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            indent: false,
            write_declaration: true,
            atomic: false,
        }
    }
}

impl SaveOptions {
    /// Load options that pair with these save options.
    ///
    /// Re-indenting on top of preserved layout whitespace doubles every
    /// newline, so layout is only kept when the emitter will not indent.
    pub fn load_options(&self, keep_comments: bool) -> LoadOptions {
        LoadOptions {
            keep_comments,
            keep_whitespace: !self.indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_drops_whitespace_on_load() {
        let save = SaveOptions {
            indent: true,
            ..SaveOptions::default()
        };
        let load = save.load_options(true);
        assert!(!load.keep_whitespace);
        assert!(load.keep_comments);
    }

    #[test]
    fn test_defaults_preserve_layout() {
        let load = SaveOptions::default().load_options(false);
        assert!(load.keep_whitespace);
        assert!(!load.keep_comments);
    }
}
