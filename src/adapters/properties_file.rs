use crate::adapters::memory::MemoryProperties;
use crate::domain::ports::PropertyStore;
use crate::utils::error::{ClasspathError, Result};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Flat `key=value` file used to pass properties to a forked process.
///
/// Escaping follows `java.util.Properties`: backslash, line breaks, tabs and
/// form feeds are always escaped; keys also escape whitespace, `=`, `:`, `#`
/// and `!`; values escape a leading blank. A key ends at the first unescaped
/// `=` or `:`. Blank lines and lines starting with `#` or `!` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesFile {
    properties: MemoryProperties,
}

impl PropertiesFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let file = content.parse::<PropertiesFile>()?;
        tracing::debug!(
            "Loaded {} properties from {}",
            file.properties.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.render())?;
        tracing::debug!(
            "Saved {} properties to {}",
            self.properties.len(),
            path.display()
        );
        Ok(())
    }

    /// One escaped `key=value` line per entry, sorted by key.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.properties.iter() {
            out.push_str(&escape(key, true));
            out.push('=');
            out.push_str(&escape(value, false));
            out.push('\n');
        }
        out
    }

    pub fn properties(&self) -> &MemoryProperties {
        &self.properties
    }
}

impl FromStr for PropertiesFile {
    type Err = ClasspathError;

    fn from_str(content: &str) -> Result<Self> {
        let mut properties = MemoryProperties::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = parse_line(line).ok_or_else(|| ClasspathError::PropertiesParse {
                line: index + 1,
                content: raw.to_string(),
            })?;
            properties.set_property(&key, &value);
        }

        Ok(Self { properties })
    }
}

impl PropertyStore for PropertiesFile {
    fn get_property(&self, key: &str) -> Option<String> {
        self.properties.get_property(key)
    }

    fn set_property(&mut self, key: &str, value: &str) {
        self.properties.set_property(key, value);
    }
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (position, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_whitespace() && (is_key || position == 0) => {
                out.push('\\');
                out.push(c);
            }
            '=' | ':' | '#' | '!' if is_key => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

fn unescape_char(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'f' => '\u{c}',
        other => other,
    }
}

// `None` for a missing separator or a dangling backslash.
fn parse_line(line: &str) -> Option<(String, String)> {
    let mut chars = line.chars();
    let mut key = String::new();
    let mut pending_whitespace = String::new();
    let mut separated = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                key.push_str(&pending_whitespace);
                pending_whitespace.clear();
                key.push(unescape_char(chars.next()?));
            }
            '=' | ':' => {
                separated = true;
                break;
            }
            c if c.is_whitespace() => pending_whitespace.push(c),
            c => {
                key.push_str(&pending_whitespace);
                pending_whitespace.clear();
                key.push(c);
            }
        }
    }
    if !separated {
        return None;
    }

    let mut value = String::new();
    let mut rest = chars.as_str().trim_start().chars();
    while let Some(c) = rest.next() {
        if c == '\\' {
            value.push(unescape_char(rest.next()?));
        } else {
            value.push(c);
        }
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::configuration::ClasspathConfiguration;
    use crate::domain::model::Classpath;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content =
            "# written by the booter\n\n! legacy comment\ntest0=foo.jar\n  test1 = bar.jar\n";
        let file: PropertiesFile = content.parse().unwrap();
        assert_eq!(file.get_property("test0").as_deref(), Some("foo.jar"));
        assert_eq!(file.get_property("test1").as_deref(), Some("bar.jar"));
        assert_eq!(file.properties().len(), 2);
    }

    #[test]
    fn test_value_may_contain_separators() {
        let file: PropertiesFile = "url0=https://repo.example.com/a.jar?v=2".parse().unwrap();
        assert_eq!(
            file.get_property("url0").as_deref(),
            Some("https://repo.example.com/a.jar?v=2")
        );
    }

    #[test]
    fn test_line_without_separator_is_rejected() {
        let result = "test0=foo.jar\nnot a property\n".parse::<PropertiesFile>();
        match result {
            Err(ClasspathError::PropertiesParse { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "not a property");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_dangling_backslash_is_rejected() {
        let result = "test0=foo.jar\\".parse::<PropertiesFile>();
        assert!(matches!(result, Err(ClasspathError::PropertiesParse { line: 1, .. })));
    }

    #[test]
    fn test_render_is_sorted() {
        let mut file = PropertiesFile::new();
        file.set_property("b", "2");
        file.set_property("a", "1");
        assert_eq!(file.render(), "a=1\nb=2\n");
    }

    #[test]
    fn test_render_escapes_special_characters() {
        let mut file = PropertiesFile::new();
        file.set_property("a key=x", " lead\ttab\\end");
        assert_eq!(file.render(), "a\\ key\\=x=\\ lead\\ttab\\\\end\n");
    }

    #[test]
    fn test_awkward_values_round_trip() {
        let mut file = PropertiesFile::new();
        let entries = [
            ("#hash", "a.jar\nchildDelegation=true"),
            ("col:on", " spaced.jar "),
            ("back\\slash", "C:\\lib\\a.jar\r\n"),
            (" lead", "\ttabbed"),
        ];
        for (key, value) in entries {
            file.set_property(key, value);
        }

        let parsed: PropertiesFile = file.render().parse().unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn test_embedded_newline_cannot_inject_flags() {
        let config = ClasspathConfiguration::new(
            ["a.jar\nchildDelegation=true", " spaced.jar "]
                .into_iter()
                .collect(),
            Classpath::new(),
            false,
            false,
        );
        let mut file = PropertiesFile::new();
        config.write_to_fork_properties(&mut file);

        let parsed: PropertiesFile = file.render().parse().unwrap();
        let child = ClasspathConfiguration::read_from_fork_properties(&parsed);
        assert_eq!(
            child.test_classpath.get_class_path(),
            vec!["a.jar\nchildDelegation=true", " spaced.jar "]
        );
        assert!(!child.child_delegation);
        assert_eq!(child, config);
    }

    #[test]
    fn test_classpath_round_trip_through_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("fork.properties");

        let classpath: Classpath = ["foo.jar", "bar.jar"].into_iter().collect();
        let mut file = PropertiesFile::new();
        classpath.write_to_fork_properties(&mut file, "test");
        file.save(&path).unwrap();

        let loaded = PropertiesFile::load(&path).unwrap();
        assert_eq!(loaded, file);
        assert_eq!(Classpath::read_from_fork_properties(&loaded, "test"), classpath);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = PropertiesFile::load(temp_dir.path().join("absent.properties"));
        assert!(matches!(result, Err(ClasspathError::IoError(_))));
    }
}
