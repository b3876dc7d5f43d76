//! Built-in equivalent-circuit elements.
//!
//! Each element owns a [`ParameterVector`](crate::parameters::ParameterVector)
//! backed by a static parameter table and implements
//! [`ImpedanceElement`](crate::element::ImpedanceElement) with one closed-form
//! impedance formula. `ω = 2πf` throughout.
//!
//! | Element | Symbol | Impedance |
//! |---|---|---|
//! | [`Cpe`] | CPE | `1 / (Q0 (jω)^α)` |
//! | [`Flw`] | FLW | `Z0 tanh(√(jωτ)) / √(jωτ)` |
//! | [`Gerischer`] | G | `R / √(1 + jωτ)` |
//! | [`HavriliakNegami`] | R_HN | `R / (1 + (jωτ)^α)^β` |
//! | [`Resistor`] | R | `R` |
//! | [`Capacitor`] | C | `1 / (jωC)` |
//! | [`Inductor`] | L | `jωL` |
//! | [`Warburg`] | W | `Aw/√ω - j Aw/√ω` |
//! | [`Zarc`] | R_CPE | `R / (1 + (jωτ)^α)` |

mod capacitor;
mod cpe;
mod flw;
mod gerischer;
mod havriliak_negami;
mod inductor;
mod resistor;
mod warburg;
mod zarc;

// Re-export the elements
pub use capacitor::Capacitor;
pub use cpe::Cpe;
pub use flw::Flw;
pub use gerischer::Gerischer;
pub use havriliak_negami::HavriliakNegami;
pub use inductor::Inductor;
pub use resistor::Resistor;
pub use warburg::Warburg;
pub use zarc::Zarc;
