use std::fmt;

/// Opens a scope: the event becomes a tree node and the following events nest under it.
pub const BEGIN_TAG: &str = "begin";
/// Closes the innermost open scope.
pub const END_TAG: &str = "end";
/// Events carrying this tag are not printed by the stdout drain.
pub const DONTPRINT_TAG: &str = "dontprint";

/// A named tag attached to an event. Markers can reference other markers,
/// and a marker "contains" a name if it or any of its references carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
    references: Vec<Marker>,
}

impl Marker {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            references: vec![],
        }
    }

    pub fn begin() -> Self {
        Self::new(BEGIN_TAG)
    }

    pub fn end() -> Self {
        Self::new(END_TAG)
    }

    /// `"checkout #begin #dontprint"` => marker `checkout` referencing
    /// `begin` and `dontprint`.
    pub fn parse(s: &str) -> Self {
        let (name, tags) = crate::utils::extract_tags(s);
        tags.into_iter()
            .fold(Self::new(name), |marker, tag| marker.add(Self::new(tag)))
    }

    pub fn add(mut self, reference: Marker) -> Self {
        self.references.push(reference);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name == name || self.references.iter().any(|r| r.contains(name))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for reference in &self.references {
            write!(f, " #{}", reference)?;
        }
        Ok(())
    }
}
