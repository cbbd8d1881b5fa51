use std::fmt::Debug;

use crate::types::{BalancedNode, KvNode, Node};

/// Debug dump of the subtree at `node`, one node per line.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: BalancedNode + KvNode<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let child_tab = format!("{tab}  ");
            let left = print::<K, V, N>(arena, n.l(), &child_tab);
            let right = print::<K, V, N>(arena, n.r(), &child_tab);
            format!(
                "Node[{i}] [bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.balance(),
                n.key(),
                n.value()
            )
        }
    }
}
