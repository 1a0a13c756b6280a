//! This module reimports a common used types.

// Reimport solving types
pub use crate::solver::MilpBackend;
pub use crate::solver::SolveBudget;
pub use crate::solver::Solver;
pub use crate::solver::SolverBackend;
pub use crate::solver::VALUE_TOLERANCE;
pub use crate::solver::extract_solution;

// Reimport domain types
pub use crate::models::CustomerIndex;
pub use crate::models::ProblemInstance;
pub use crate::models::Solution;
pub use crate::models::SolveStatus;
pub use crate::models::SupplyEntry;
pub use crate::models::WarehouseIndex;

// Reimport formulation types
pub use crate::catalog::ConstraintToggleSet;
pub use crate::formulation::AbstractModel;
pub use crate::formulation::FormulationConfig;
pub use crate::formulation::FormulationKind;
pub use crate::formulation::create_model;

// Reimport utils
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::ModelError;
pub use crate::utils::ModelResult;
pub use crate::utils::Timer;
pub use crate::utils::create_silent_logger;
pub use crate::utils::create_stdout_logger;
