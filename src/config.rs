//! Serializable element descriptions.
//!
//! An [`ElementConfig`] names an element kind and any parameters that should
//! differ from the kind's defaults. It is the named-parameter construction
//! interface for callers that describe elements as data (JSON files, UIs,
//! scripts):
//!
//! ```json
//! { "kind": "CPE", "parameters": { "alpha": 0.8 } }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::{ElementKind, ImpedanceElement};
use crate::error::Result;
use crate::parameters::ValidationError;

/// Named-parameter description of a single element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    /// Which element to build
    pub kind: ElementKind,

    /// Parameter values by name; missing entries take the kind's default
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

impl ElementConfig {
    /// Create a config for `kind` with every parameter at its default
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            parameters: BTreeMap::new(),
        }
    }

    /// Set one named parameter
    pub fn with_parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    /// Set several named parameters
    pub fn with_parameters<'a, I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (name, value) in values {
            self.parameters.insert(name.to_string(), value);
        }
        self
    }

    /// Describe an existing element, recording all of its current values
    pub fn from_element<E>(element: &E) -> Self
    where
        E: ImpedanceElement + ?Sized,
    {
        element.to_config()
    }

    /// Positional values for this config: defaults overridden by name
    ///
    /// # Returns
    ///
    /// The values in table order, or [`ValidationError::UnknownParameter`]
    /// for a name the kind does not have. Bounds are not checked here.
    pub fn values(&self) -> std::result::Result<Vec<f64>, ValidationError> {
        let specs = self.kind.parameter_specs();

        if let Some(unknown) = self
            .parameters
            .keys()
            .find(|name| !specs.iter().any(|spec| spec.name == name.as_str()))
        {
            return Err(ValidationError::UnknownParameter {
                name: unknown.clone(),
            });
        }

        Ok(specs
            .iter()
            .map(|spec| self.parameters.get(spec.name).copied().unwrap_or(spec.default))
            .collect())
    }

    /// Build the element described by this config
    ///
    /// # Examples
    ///
    /// ```
    /// use zmodel_rs::config::ElementConfig;
    /// use zmodel_rs::element::ElementKind;
    ///
    /// let element = ElementConfig::new(ElementKind::Cpe)
    ///     .with_parameter("alpha", 0.8)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(element.parameter("Q0"), Some(30.0));
    /// assert_eq!(element.parameter("alpha"), Some(0.8));
    /// ```
    pub fn build(&self) -> Result<Box<dyn ImpedanceElement>> {
        let values = self.values()?;
        Ok(self.kind.build(&values)?)
    }

    /// Save the config to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Serialize the config to a JSON string
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Load a config from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ElementConfig = serde_json::from_str(json)?;
        Ok(config)
    }
}
