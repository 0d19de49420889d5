//! Seed, expand twice, then try to delete the seed.

use vsm_tree::{Error, Point, TreeConfig, TreeStore};

const EPS: f64 = 1e-9;

#[test]
fn seed_expand_expand_delete() {
    let store = TreeStore::seeded(TreeConfig::default()).unwrap();

    // First ring: a hexagon of radius 1/2 around the origin.
    let ring = store.expand_node("0/0/1", Some(6)).unwrap();
    let tags: Vec<_> = ring.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(
        tags,
        ["0/0/1-1", "0/0/1-2", "0/0/1-3", "0/0/1-4", "0/0/1-5", "0/0/1-6"]
    );
    for (i, node) in ring.iter().enumerate() {
        assert_eq!(node.layer, 1);
        assert_eq!(node.parent.as_ref().map(|p| p.as_str()), Some("0/0/1"));
        let angle = i as f64 * std::f64::consts::TAU / 6.0;
        let expected = Point::new(0.5 * angle.cos(), 0.5 * angle.sin());
        assert!(node.position.distance(&expected) < EPS, "{} at {}", node.tag, node.position);
    }

    // Second ring: a triangle of radius 1/3 around 0/0/1-1.
    let center = store.get_node("0/0/1-1").unwrap().position;
    let tri = store.expand_node("0/0/1-1", Some(3)).unwrap();
    let tags: Vec<_> = tri.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(tags, ["0/0/1-1-1", "0/0/1-1-2", "0/0/1-1-3"]);
    for node in &tri {
        assert_eq!(node.layer, 2);
        assert!((node.position.distance(&center) - 1.0 / 3.0).abs() < EPS);
    }

    assert!(matches!(
        store.delete_node("0/0/1"),
        Err(Error::HasChildren { .. })
    ));
    assert_eq!(store.len(), 10);
}

#[test]
fn leaves_delete_bottom_up() {
    let store = TreeStore::seeded(TreeConfig::default()).unwrap();
    store.expand_node("0/0/1", Some(3)).unwrap();
    store.expand_node("0/0/1-1", Some(3)).unwrap();

    assert!(store.delete_node("0/0/1-1").is_err());
    for leaf in ["0/0/1-1-1", "0/0/1-1-2", "0/0/1-1-3", "0/0/1-1", "0/0/1-2", "0/0/1-3"] {
        store.delete_node(leaf).unwrap();
    }
    store.delete_node("0/0/1").unwrap();
    assert!(store.is_empty());
}

#[test]
fn json_contract() {
    let store = TreeStore::seeded(TreeConfig::default()).unwrap();
    store.expand_node("0/0/1", Some(3)).unwrap();

    let all = serde_json::to_value(store.get_all_nodes()).unwrap();
    let root = &all["0/0/1"];
    assert_eq!(root["polyOrder"], 6);
    assert_eq!(root["children"], serde_json::json!(["0/0/1-1", "0/0/1-2", "0/0/1-3"]));
    assert_eq!(all["0/0/1-2"]["parent"], "0/0/1");
    assert_eq!(all["0/0/1-2"]["layer"], 1);
    assert!(all["0/0/1-2"]["position"]["x"].is_f64());
}

#[test]
fn ring_radius_shrinks_with_depth() {
    let store = TreeStore::seeded(TreeConfig::default()).unwrap();
    let mut tag = String::from("0/0/1");
    let mut last_radius = f64::INFINITY;

    for _ in 0..8 {
        let parent = store.get_node(&tag).unwrap();
        let ring = store.expand_node(&tag, Some(3)).unwrap();
        let radius = ring[0].position.distance(&parent.position);
        assert!(radius < last_radius);
        assert!(radius > 0.0);
        last_radius = radius;
        tag = ring[0].tag.to_string();
    }
    assert_eq!(store.get_node(&tag).unwrap().layer, 8);
}

#[test]
fn deleted_tags_are_not_reissued() {
    let store = TreeStore::seeded(TreeConfig::default()).unwrap();
    store.expand_node("0/0/1", Some(4)).unwrap();
    store.expand_node("0/0/1-4", Some(3)).unwrap();
    for leaf in ["0/0/1-4-1", "0/0/1-4-2", "0/0/1-4-3", "0/0/1-4", "0/0/1-1"] {
        store.delete_node(leaf).unwrap();
    }

    let created = store.expand_node("0/0/1", Some(6)).unwrap();
    let tags: Vec<_> = created.iter().map(|n| n.tag.as_str()).collect();
    assert_eq!(tags, ["0/0/1-5", "0/0/1-6"]);

    // 0/0/1-4 is gone for good, so its children can never come back either.
    assert!(matches!(
        store.expand_node("0/0/1-4", None),
        Err(Error::NotFound(_))
    ));
    assert_eq!(store.len(), 5);
}
