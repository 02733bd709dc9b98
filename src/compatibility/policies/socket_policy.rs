use crate::compatibility::domain::{
    Category, CompatibilityIssue, ComponentGroups, ComponentRecord, IssueKind,
};

/// SocketPolicy - CPU and motherboard must share a socket
///
/// Only evaluated when the build holds exactly one CPU and exactly one
/// motherboard. A missing socket on either side is not a constraint.
pub struct SocketPolicy;

impl SocketPolicy {
    pub fn check(groups: &ComponentGroups<'_>) -> Vec<CompatibilityIssue> {
        let (Some(cpu), Some(board)) = (
            groups.single(&Category::Cpu),
            groups.single(&Category::Motherboard),
        ) else {
            return Vec::new();
        };

        match Self::sockets(cpu, board) {
            Some((cpu_socket, board_socket)) if cpu_socket != board_socket => {
                vec![CompatibilityIssue::error(
                    IssueKind::SocketMismatch,
                    format!(
                        "Incompatible sockets: processor uses {}, motherboard uses {}",
                        cpu_socket, board_socket
                    ),
                    vec![cpu.id().clone(), board.id().clone()],
                )
                .with_suggestion(format!("Choose a processor with socket {}", board_socket))
                .with_suggestion(format!("Choose a motherboard with socket {}", cpu_socket))]
            }
            _ => Vec::new(),
        }
    }

    /// Pairwise form used when narrowing catalog candidates
    pub fn is_compatible(cpu: &ComponentRecord, board: &ComponentRecord) -> bool {
        Self::sockets(cpu, board).is_none_or(|(a, b)| a == b)
    }

    fn sockets(cpu: &ComponentRecord, board: &ComponentRecord) -> Option<(String, String)> {
        let cpu_socket = cpu.specs().as_cpu()?.socket.clone()?;
        let board_socket = board.specs().as_motherboard()?.socket.clone()?;
        Some((cpu_socket, board_socket))
    }
}
