use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use radref_core::check::check_scheme;
use radref_core::models::Scheme;
use radref_report::check_template;

use crate::error::CalculatorError;
use crate::schemes;
use crate::Calculator;

/// Listing entry for the scheme index page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SchemeSummary {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
}

/// The immutable, self-checked set of calculators.
pub struct Registry {
    calculators: Vec<Box<dyn Calculator>>,
}

impl Registry {
    /// Build from a list of calculators, rejecting any authoring defect.
    pub fn new(calculators: Vec<Box<dyn Calculator>>) -> Result<Self, CalculatorError> {
        for (i, calculator) in calculators.iter().enumerate() {
            if calculators[..i].iter().any(|c| c.key() == calculator.key()) {
                return Err(CalculatorError::Definition(
                    radref_core::error::SchemeError::DuplicateKey {
                        scheme: calculator.key().to_string(),
                        key: calculator.key().to_string(),
                    },
                ));
            }
            if let Some(error) = check_scheme(calculator.scheme()).into_iter().next() {
                return Err(error.into());
            }
            check_template(calculator.scheme())?;
        }
        Ok(Self { calculators })
    }

    /// Look up a calculator by key.
    pub fn get(&self, key: &str) -> Result<&dyn Calculator, CalculatorError> {
        self.calculators
            .iter()
            .find(|c| c.key() == key)
            .map(|c| c.as_ref())
            .ok_or_else(|| CalculatorError::UnknownScheme(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Calculator> {
        self.calculators.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    pub fn summaries(&self) -> Vec<SchemeSummary> {
        self.iter()
            .map(|c| SchemeSummary {
                key: c.key().to_string(),
                name: c.name().to_string(),
                description: c.scheme().description.clone(),
            })
            .collect()
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let registry = Registry::new(all_calculators())
        .unwrap_or_else(|e| panic!("built-in scheme table is malformed: {e}"));
    tracing::info!(schemes = registry.len(), "scheme registry loaded");
    registry
});

/// The process-wide registry of built-in calculators.
///
/// # Panics
///
/// Panics on first use if a built-in scheme fails its self-checks. The
/// tables are static, so this indicates an authoring bug caught by the
/// registry tests.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Return all built-in calculators, unchecked.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(schemes::bosniak::Bosniak),
        Box::new(schemes::lirads::LiRads),
        Box::new(schemes::birads::BiRads),
        Box::new(schemes::pirads::PiRads),
        Box::new(schemes::fleischner::Fleischner),
        Box::new(schemes::cad_rads::CadRads),
        Box::new(schemes::o_rads::ORadsMri),
        Box::new(schemes::lung_rads::LungRads),
        Box::new(schemes::aast::AastSpleen),
        Box::new(schemes::aast::AastLiver),
        Box::new(schemes::aast::AastKidney),
        Box::new(schemes::ao_spine::AoSpineThoracolumbar),
        Box::new(schemes::renal::RenalNephrometry),
        Box::new(schemes::villalta::Villalta),
        Box::new(schemes::pesi::Pesi),
        Box::new(schemes::aspects::Aspects),
        Box::new(schemes::c_rads::CRads),
        Box::new(schemes::bone_rads::BoneRads),
        Box::new(schemes::ckd_epi::CkdEpi),
        Box::new(schemes::prostate_volume::ProstateVolume),
    ]
}

/// Look up a built-in calculator by key.
pub fn get_calculator(key: &str) -> Result<&'static dyn Calculator, CalculatorError> {
    registry().get(key)
}

/// Look up a built-in scheme by key.
pub fn get_scheme(key: &str) -> Result<&'static Scheme, CalculatorError> {
    get_calculator(key).map(|c| c.scheme())
}
