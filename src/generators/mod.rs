pub mod traits;
pub mod balanced_tree;
pub mod erdos_renyi;
pub mod watts_strogatz;
pub mod barabasi_albert;
pub mod config;
pub mod ensemble;

pub use traits::GraphGenerator;
pub use balanced_tree::{balanced_tree, BalancedTree};
pub use erdos_renyi::{ErdosRenyiNm, ErdosRenyiNp};
pub use watts_strogatz::{watts_strogatz, WattsStrogatz};
pub use barabasi_albert::{barabasi_albert, BarabasiAlbert};
pub use config::Model;
pub use ensemble::ensemble;
