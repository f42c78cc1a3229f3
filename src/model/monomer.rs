use serde::{Deserialize, Serialize};

/// A molecular subunit type: a name plus its declared sites
///
/// Sites come in two kinds. A binding site (declared with
/// [binding_site](Monomer::binding_site)) is either free or bonded to a site
/// on another subunit. A state site (declared with
/// [state_site](Monomer::state_site)) always carries exactly one value from
/// its declared alphabet.
///
/// # Examples
/// ```
/// use mompsol::model::Monomer;
///
/// let bid = Monomer::new("Bid")
///     .binding_site("bf")
///     .state_site("state", &["U", "T", "M"]);
/// assert_eq!(bid.name(), "Bid");
/// assert_eq!(bid.sites().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monomer {
    name: String,
    sites: Vec<Site>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    name: String,
    states: Vec<String>,
}

impl Site {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared state alphabet; empty for a pure binding site.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn is_state_site(&self) -> bool {
        !self.states.is_empty()
    }
}

impl Monomer {
    pub fn new(name: impl Into<String>) -> Self {
        Monomer {
            name: name.into(),
            sites: Vec::new(),
        }
    }

    /// Add a binding site. Declaration order is significant: patterns render
    /// their sites in this order.
    pub fn binding_site(mut self, name: &str) -> Self {
        self.sites.push(Site {
            name: name.to_string(),
            states: Vec::new(),
        });
        self
    }

    /// Add a site constrained to a fixed set of internal states.
    pub fn state_site(mut self, name: &str, states: &[&str]) -> Self {
        self.sites.push(Site {
            name: name.to_string(),
            states: states.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn site(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.name == name)
    }
}
