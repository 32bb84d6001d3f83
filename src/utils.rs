use anyhow::Result;
use std::collections::BTreeSet;

pub(crate) type Tags = BTreeSet<String>;

// Extract tags encoded with hashtags. Everything before the first `#` is the
// key, e.g. `checkout #begin #dontprint` => key `checkout` and tags
// ['begin', 'dontprint']. A string starting with `#` has an empty key.
pub(crate) fn extract_tags(string_with_tags: &str) -> (String, Tags) {
    let mut segments = string_with_tags.split('#').map(|s| s.trim());
    let key = segments.next().unwrap_or("").to_string();
    let tags = segments
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();
    (key, tags)
}

pub fn strip_ansi(s: &str) -> Result<String> {
    let stripped = strip_ansi_escapes::strip(s)?;
    Ok(String::from_utf8(stripped)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::*;

    #[test]
    fn test_tags_extraction() {
        let mut result = String::new();

        let markers = vec![
            "checkout#begin",
            "#end",
            "checkout #begin #dontprint",
            "",
            "plain",
            "spaced  out # #end   #  begin",
        ];

        for marker in markers {
            let (key, tags) = extract_tags(marker);
            result.push_str(&format!(
                "{:.<30}  {:.<12} => {}\n",
                marker,
                key,
                tags.into_iter().collect::<Vec<_>>().join(", "),
            ))
        }

        assert_equal!(
            result,
            "\
checkout#begin................  checkout.... => begin
#end..........................  ............ => end
checkout #begin #dontprint....  checkout.... => begin, dontprint
..............................  ............ => 
plain.........................  plain....... => 
spaced  out # #end   #  begin.  spaced  out. => begin, end
"
            .to_string()
        );
    }

    #[test]
    fn strips_colors() -> Result<()> {
        use colored::*;
        colored::control::set_override(true);
        let colored = format!("{} {}", "a".red(), "b".dimmed());
        assert_equal!(strip_ansi(&colored)?, "a b".to_string());
        Ok(())
    }
}
