use avl_bst::types::Node;
use avl_bst::util::{
    descend, find, first, height, insert_left, insert_right, last, next, prev, remove, size,
    splice, swap, Descent, Side,
};

#[derive(Clone, Debug)]
struct TestNode {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    k: i32,
}

impl TestNode {
    fn new(k: i32) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }
}

impl Node for TestNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

fn cmp_i32(a: &i32, b: &i32) -> i32 {
    a.cmp(b) as i32
}

/// Plain BST insert through the public descent + attach helpers.
fn build(keys: &[i32]) -> (Vec<TestNode>, Option<u32>) {
    let mut arena: Vec<TestNode> = Vec::new();
    let mut root = None;
    for k in keys {
        arena.push(TestNode::new(*k));
        let idx = (arena.len() - 1) as u32;
        match descend(&arena, root, k, |n| &n.k, cmp_i32) {
            Descent::Empty => root = Some(idx),
            Descent::Found(_) => unreachable!("keys are unique"),
            Descent::Vacant { parent, side } => match side {
                Side::Left => insert_left(&mut arena, idx, parent),
                Side::Right => insert_right(&mut arena, idx, parent),
            },
        }
    }
    (arena, root)
}

fn in_order(arena: &[TestNode], root: Option<u32>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(arena[i as usize].k);
        curr = next(arena, i);
    }
    out
}

#[test]
fn util_traversal_matrix() {
    let (arena, root) = build(&[5, 3, 8, 1, 4, 7, 9, 2]);
    assert_eq!(in_order(&arena, root), vec![1, 2, 3, 4, 5, 7, 8, 9]);
    assert_eq!(first(&arena, root).map(|i| arena[i as usize].k), Some(1));
    assert_eq!(last(&arena, root).map(|i| arena[i as usize].k), Some(9));
    assert_eq!(size(&arena, root), 8);
    assert_eq!(height(&arena, root), 4);
    assert_eq!(height(&arena, None), 0);

    let mut back = Vec::new();
    let mut curr = last(&arena, root);
    while let Some(i) = curr {
        back.push(arena[i as usize].k);
        curr = prev(&arena, i);
    }
    assert_eq!(back, vec![9, 8, 7, 5, 4, 3, 2, 1]);
}

#[test]
fn util_find_matrix() {
    let (arena, root) = build(&[5, 3, 8]);
    let idx = find(&arena, root, &8, |n| &n.k, cmp_i32);
    assert_eq!(idx.map(|i| arena[i as usize].k), Some(8));
    assert_eq!(find(&arena, root, &6, |n| &n.k, cmp_i32), None);
    assert_eq!(
        descend(&arena, root, &6, |n| &n.k, cmp_i32),
        Descent::Vacant {
            parent: 2,
            side: Side::Left
        }
    );
    assert_eq!(descend::<TestNode, i32, _, _>(&[], None, &6, |n| &n.k, cmp_i32), Descent::Empty);
}

#[test]
fn util_remove_matrix() {
    for victim in [5, 3, 8, 1, 4, 7, 9, 2] {
        let (mut arena, root) = build(&[5, 3, 8, 1, 4, 7, 9, 2]);
        let idx = find(&arena, root, &victim, |n| &n.k, cmp_i32).unwrap();
        let root = remove(&mut arena, root, idx);
        let expected: Vec<i32> = [1, 2, 3, 4, 5, 7, 8, 9]
            .into_iter()
            .filter(|k| *k != victim)
            .collect();
        assert_eq!(in_order(&arena, root), expected);
        assert_eq!(size(&arena, root), 7);
        let r = root.unwrap();
        assert_eq!(arena[r as usize].p, None);
    }
}

#[test]
fn util_splice_leaf_and_swap_matrix() {
    let (mut arena, root) = build(&[2, 1, 3]);
    let spliced = splice(&mut arena, root, 1);
    assert_eq!(spliced.root, root);
    assert_eq!(spliced.parent, Some((0, Side::Left)));
    assert_eq!(in_order(&arena, spliced.root), vec![2, 3]);

    let (mut arena, root) = build(&[2, 1, 3]);
    let root = swap(&mut arena, root.unwrap(), 0, 2);
    assert_eq!(root, 2);
    assert_eq!(arena[2].l, Some(1));
    assert_eq!(arena[2].r, Some(0));
    assert_eq!(arena[0].p, Some(2));
    assert_eq!(arena[1].p, Some(2));
}
