pub mod logging;

// Login gate and token persistence
pub mod session;

// Remote post list
pub mod records;

// Filter / paginate state machine behind the dashboard
pub mod browser;
