use serde::{Deserialize, Serialize};

use crate::generators::{
    BalancedTree, BarabasiAlbert, ErdosRenyiNm, ErdosRenyiNp, GraphGenerator, WattsStrogatz,
};
use crate::graph::Graph;
use crate::random::RandomSource;
use crate::Result;

/// Any of the supported models with its parameters
///
/// Deserializes from a record tagged by `"model"`, e.g.
/// `{ "model": "watts_strogatz", "n": 100, "k": 4, "beta": 0.2 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum Model {
    BalancedTree(BalancedTree),
    ErdosRenyiNp(ErdosRenyiNp),
    ErdosRenyiNm(ErdosRenyiNm),
    WattsStrogatz(WattsStrogatz),
    BarabasiAlbert(BarabasiAlbert),
}

impl Model {
    /// Parses and validates a model description
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Model = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }
}

impl GraphGenerator for Model {
    fn validate(&self) -> Result<()> {
        match self {
            Model::BalancedTree(g) => g.validate(),
            Model::ErdosRenyiNp(g) => g.validate(),
            Model::ErdosRenyiNm(g) => g.validate(),
            Model::WattsStrogatz(g) => g.validate(),
            Model::BarabasiAlbert(g) => g.validate(),
        }
    }

    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        match self {
            Model::BalancedTree(g) => g.generate(rng),
            Model::ErdosRenyiNp(g) => g.generate(rng),
            Model::ErdosRenyiNm(g) => g.generate(rng),
            Model::WattsStrogatz(g) => g.generate(rng),
            Model::BarabasiAlbert(g) => g.generate(rng),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Model::BalancedTree(g) => g.name(),
            Model::ErdosRenyiNp(g) => g.name(),
            Model::ErdosRenyiNm(g) => g.name(),
            Model::WattsStrogatz(g) => g.name(),
            Model::BarabasiAlbert(g) => g.name(),
        }
    }
}

impl From<BalancedTree> for Model {
    fn from(g: BalancedTree) -> Self {
        Model::BalancedTree(g)
    }
}

impl From<ErdosRenyiNp> for Model {
    fn from(g: ErdosRenyiNp) -> Self {
        Model::ErdosRenyiNp(g)
    }
}

impl From<ErdosRenyiNm> for Model {
    fn from(g: ErdosRenyiNm) -> Self {
        Model::ErdosRenyiNm(g)
    }
}

impl From<WattsStrogatz> for Model {
    fn from(g: WattsStrogatz) -> Self {
        Model::WattsStrogatz(g)
    }
}

impl From<BarabasiAlbert> for Model {
    fn from(g: BarabasiAlbert) -> Self {
        Model::BarabasiAlbert(g)
    }
}
