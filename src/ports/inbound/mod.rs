/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod graph_visualization_port;

pub use graph_visualization_port::GraphVisualizationPort;
