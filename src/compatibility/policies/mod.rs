pub mod form_factor_policy;
pub mod memory_policy;
pub mod power_budget_policy;
pub mod socket_policy;
pub mod status_policy;

pub use form_factor_policy::FormFactorPolicy;
pub use memory_policy::MemoryPolicy;
pub use power_budget_policy::PowerBudgetPolicy;
pub use socket_policy::SocketPolicy;
pub use status_policy::StatusPolicy;
