use crate::types::Node;

use super::{child, get_l, get_p, get_r, set_child, set_p, side_of, Side};

/// Exchanges the structural positions of `x` and `y`, returning the root.
///
/// Each node keeps its identity (arena slot, key, value); only the links
/// move. Handles the case where one node is the direct child of the other.
pub fn swap<N: Node>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }
    // When adjacent, make `x` the upper node.
    let (x, y) = if get_p(arena, x) == Some(y) { (y, x) } else { (x, y) };

    let xp = get_p(arena, x).map(|p| (p, side_of(arena, p, x)));
    let yp = get_p(arena, y).map(|p| (p, side_of(arena, p, y)));
    let (xl, xr) = (get_l(arena, x), get_r(arena, x));
    let (yl, yr) = (get_l(arena, y), get_r(arena, y));

    let mut root = root;
    let mut take_place = |arena: &mut [N], slot: Option<(u32, Side)>, node: u32| match slot {
        Some((p, side)) => set_child(arena, p, side, Some(node)),
        None => {
            set_p(arena, node, None);
            root = node;
        }
    };

    if let Some((_, side)) = yp.filter(|(p, _)| *p == x) {
        let sibling = child(arena, x, side.opposite());
        take_place(arena, xp, y);
        set_child(arena, y, side, Some(x));
        set_child(arena, y, side.opposite(), sibling);
    } else {
        take_place(arena, xp, y);
        take_place(arena, yp, x);
        set_child(arena, y, Side::Left, xl);
        set_child(arena, y, Side::Right, xr);
    }
    set_child(arena, x, Side::Left, yl);
    set_child(arena, x, Side::Right, yr);

    root
}
