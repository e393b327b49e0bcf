use crate::libs::phylo::error::TreeError;
use crate::libs::phylo::node::NodeId;
use crate::libs::phylo::tree::Tree;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Sample a tree topology from the Yule pure-birth process.
///
/// Starting from a root with two tips, one existing tip is picked uniformly
/// at random and split into two children, until exactly `n_tips` tips exist.
/// Tips are named `T0..T{n-1}`; a split tip hands its name to its first child
/// and becomes an unnamed internal node. Branch lengths are left unset
/// (topology only); length assignment is a separate policy.
///
/// The RNG is supplied by the caller, never global, so a fixed seed gives a
/// bit-identical tree. With `rooted == false` the same topology is built but
/// no root is designated; call [`Tree::root_at`] before traversal or LCA.
///
/// `n_tips < 2` (including the degenerate single-node case) is rejected with
/// [`TreeError::InvalidTipCount`]: a tree needs at least two tips to have any
/// internal structure.
///
/// # Example
/// ```
/// use nwt::libs::phylo::generate;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let tree = generate::yule(5, true, &mut rng).unwrap();
/// assert_eq!(tree.tips().len(), 5);
/// ```
pub fn yule<R: Rng>(n_tips: usize, rooted: bool, rng: &mut R) -> Result<Tree, TreeError> {
    if n_tips < 2 {
        return Err(TreeError::InvalidTipCount(n_tips));
    }

    let mut tree = Tree::new();
    let root = tree.add_node();

    let mut tips: Vec<NodeId> = Vec::with_capacity(n_tips);
    for i in 0..2 {
        let tip = tree.add_node();
        tree.link(root, tip)?;
        if let Some(node) = tree.get_node_mut(tip) {
            node.set_name(format!("T{}", i));
        }
        tips.push(tip);
    }

    let mut next_label = 2;
    while tips.len() < n_tips {
        let idx = rng.gen_range(0..tips.len());
        let target = tips[idx];

        // The split tip becomes internal; its taxon name moves down
        let name = tree
            .get_node_mut(target)
            .and_then(|node| node.name.take());

        let left = tree.add_node();
        tree.link(target, left)?;
        if let Some(node) = tree.get_node_mut(left) {
            node.name = name;
        }

        let right = tree.add_node();
        tree.link(target, right)?;
        if let Some(node) = tree.get_node_mut(right) {
            node.set_name(format!("T{}", next_label));
        }
        next_label += 1;

        tips[idx] = left;
        tips.push(right);
    }

    if rooted {
        tree.set_root(root);
    }

    Ok(tree)
}

/// Convenience wrapper seeding a [`SmallRng`] from `seed`.
pub fn yule_from_seed(n_tips: usize, rooted: bool, seed: u64) -> Result<Tree, TreeError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    yule(n_tips, rooted, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yule_tip_count_invariant() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in [2, 3, 5, 17, 100] {
            let tree = yule(n, true, &mut rng).unwrap();
            assert_eq!(tree.tips().len(), n);
            // A rooted binary tree on n tips has 2n - 1 nodes
            assert_eq!(tree.len(), 2 * n - 1);
            assert!(tree.is_binary());
        }
    }

    #[test]
    fn yule_rejects_small_n() {
        let mut rng = SmallRng::seed_from_u64(7);
        // N = 1 is rejected; N = 2 is the smallest valid request
        assert!(matches!(
            yule(0, true, &mut rng),
            Err(TreeError::InvalidTipCount(0))
        ));
        assert!(matches!(
            yule(1, true, &mut rng),
            Err(TreeError::InvalidTipCount(1))
        ));
        assert!(yule(2, true, &mut rng).is_ok());
    }

    #[test]
    fn yule_seed_reproducible() {
        // Same seed, same topology, bit-identical serialization
        let t1 = yule_from_seed(5, true, 42).unwrap();
        let t2 = yule_from_seed(5, true, 42).unwrap();
        assert_eq!(t1.to_newick(), t2.to_newick());

        let t3 = yule_from_seed(50, true, 42).unwrap();
        let t4 = yule_from_seed(50, true, 42).unwrap();
        assert_eq!(t3.to_newick(), t4.to_newick());
    }

    #[test]
    fn yule_names_unique() {
        let tree = yule_from_seed(20, true, 1).unwrap();
        let mut names = tree.tip_names();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn yule_lengths_unset() {
        let tree = yule_from_seed(10, true, 3).unwrap();
        assert!(!crate::libs::phylo::tree::stat::has_lengths(&tree));
    }

    #[test]
    fn yule_unrooted_has_no_root() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut tree = yule(6, false, &mut rng).unwrap();
        assert!(!tree.is_rooted());
        assert!(tree.walk_postorder(|_, _, _| true).is_err());

        // Rooting at the orientation top makes it traversable
        let top = tree.orientation_top().unwrap();
        tree.root_at(top).unwrap();
        let mut count = 0;
        tree.walk_postorder(|_, _, _| {
            count += 1;
            true
        })
        .unwrap();
        assert_eq!(count, tree.len());
    }

    #[test]
    fn yule_round_trip() {
        // parse(serialize(tree)) preserves tip set and topology
        let tree = yule_from_seed(12, true, 42).unwrap();
        let back = Tree::from_newick(&tree.to_newick()).unwrap();

        let mut names1 = tree.tip_names();
        let mut names2 = back.tip_names();
        names1.sort();
        names2.sort();
        assert_eq!(names1, names2);

        // LCA results for tip pairs are preserved, compared by clade content
        for pair in [["T0", "T1"], ["T2", "T7"], ["T4", "T11"]] {
            let lca1 = tree.lca(&pair).unwrap();
            let lca2 = back.lca(&pair).unwrap();

            let clade = |t: &Tree, id| {
                let mut names: Vec<String> = t
                    .postorder(id)
                    .iter()
                    .filter_map(|&n| t.get_node(n).and_then(|node| node.name.clone()))
                    .collect();
                names.sort();
                names
            };
            assert_eq!(clade(&tree, lca1.node), clade(&back, lca2.node));
        }
    }
}
