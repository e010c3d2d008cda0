#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use std::collections::HashSet;

    use crate::direction::Direction;
    use crate::roads::RoadNetwork;
    use crate::structures::{
        find_free_spaces, place_structures, relayout_structures, PlacementId, PlacementStats,
        Quota, Structure, StructureCatalog, StructureKind, StructureModel, StructureRegistry,
    };

    fn cell(x: i32, y: i32) -> IVec3 {
        IVec3::new(x, y, 0)
    }

    fn kind(name: &str, footprint: u32, quota: Quota) -> StructureKind {
        StructureKind {
            name: name.into(),
            footprint,
            quota,
            model: StructureModel::House,
        }
    }

    fn catalog(kinds: Vec<StructureKind>) -> StructureCatalog {
        StructureCatalog { kinds }
    }

    // A straight horizontal road from (0,0) to (len-1,0).
    fn horizontal_road(len: i32) -> Vec<IVec3> {
        (0..len).map(|x| cell(x, 0)).collect()
    }

    #[test]
    fn test_free_spots_are_not_roads_and_touch_a_road() {
        let roads = vec![cell(0, 0), cell(1, 0), cell(1, 1), cell(5, 5)];
        let road_set: HashSet<IVec3> = roads.iter().copied().collect();
        let spots = find_free_spaces(&roads);
        assert!(!spots.is_empty());
        for (spot, _) in spots.iter() {
            assert!(!road_set.contains(&spot), "{spot} is a road cell");
            let adjacent = Direction::ALL
                .into_iter()
                .any(|d| road_set.contains(&(spot + d.offset())));
            assert!(adjacent, "{spot} touches no road");
        }
    }

    #[test]
    fn test_two_cell_road_yields_six_lots() {
        let spots = find_free_spaces(&[cell(0, 0), cell(1, 0)]);
        assert_eq!(spots.len(), 6);
        let collected: Vec<(IVec3, Direction)> = spots.iter().collect();
        assert_eq!(
            collected,
            vec![
                (cell(0, 1), Direction::Down),
                (cell(0, -1), Direction::Up),
                (cell(-1, 0), Direction::Right),
                (cell(1, 1), Direction::Down),
                (cell(1, -1), Direction::Up),
                (cell(2, 0), Direction::Left),
            ]
        );
    }

    #[test]
    fn test_shared_neighbor_keeps_first_direction() {
        // (1,1) borders both (1,0) (discovered going Up -> faces Down) and
        // (0,1) (discovered going Right -> faces Left). The road list visits
        // (1,0) first, so Down wins.
        let spots = find_free_spaces(&[cell(1, 0), cell(0, 1)]);
        let found: Vec<(IVec3, Direction)> = spots
            .iter()
            .filter(|(c, _)| *c == cell(1, 1))
            .collect();
        assert_eq!(found, vec![(cell(1, 1), Direction::Down)]);
    }

    #[test]
    fn test_empty_road_set_yields_nothing() {
        assert!(find_free_spaces(&[]).is_empty());
        let plan = place_structures(&[], &mut StructureCatalog::default());
        assert!(plan.placements.is_empty());
        assert!(plan.registry.is_empty());
    }

    #[test]
    fn test_limited_then_fallback() {
        // One road cell has four lots: the first takes the limited entry,
        // the other three fall through to the unlimited filler.
        let mut cat = catalog(vec![
            kind("shop", 1, Quota::Limited(1)),
            kind("house", 1, Quota::Unlimited),
        ]);
        let plan = place_structures(&[cell(5, 5)], &mut cat);
        assert_eq!(plan.placements.len(), 4);
        assert_eq!(plan.placements[0].kind, 0);
        for placement in &plan.placements[1..] {
            assert_eq!(placement.kind, 1);
        }
        // Four distinct single-cell handles.
        assert_eq!(plan.registry.len(), 4);
        let ids: HashSet<PlacementId> = plan.registry.values().copied().collect();
        assert_eq!(ids.len(), 4);
        // The filler quota is untouched, the limited one is spent.
        assert_eq!(cat.kinds[0].quota, Quota::Limited(0));
        assert_eq!(cat.kinds[1].quota, Quota::Unlimited);
    }

    #[test]
    fn test_unlimited_fills_every_lot() {
        let roads = horizontal_road(4);
        let mut cat = catalog(vec![kind("house", 1, Quota::Unlimited)]);
        let plan = place_structures(&roads, &mut cat);
        assert_eq!(plan.placements.len(), plan.free_spots);
        assert_eq!(cat.kinds[0].quota, Quota::Unlimited);
    }

    #[test]
    fn test_wide_footprint_blocks_companions() {
        // Footprint 5 -> half = 2 -> one companion on each side, so
        // 2 * floor(5/2) - 2 = 2 extra cells, all under one handle.
        let roads = horizontal_road(6);
        let mut cat = catalog(vec![kind("block", 5, Quota::Limited(1))]);
        let plan = place_structures(&roads, &mut cat);

        assert_eq!(plan.placements.len(), 1);
        let placement = &plan.placements[0];
        // Lots at x=0 fail verification (no lot at (-1,1)); the first anchor
        // with both companions is (1,1).
        assert_eq!(placement.anchor, cell(1, 1));
        assert_eq!(placement.occupied.len(), 3);
        assert!(placement.occupied.contains(&cell(0, 1)));
        assert!(placement.occupied.contains(&cell(2, 1)));

        let id = plan.registry[&placement.anchor];
        for extra in &placement.occupied {
            assert_eq!(plan.registry[extra], id);
        }
        assert_eq!(cat.kinds[0].quota, Quota::Limited(0));
    }

    #[test]
    fn test_footprint_up_to_two_reserves_nothing() {
        // A limited entry so the wide-footprint path runs; unlimited entries
        // always place a single cell.
        let roads = horizontal_road(4);
        let mut cat = catalog(vec![kind("duplex", 2, Quota::Limited(100))]);
        let plan = place_structures(&roads, &mut cat);
        for placement in &plan.placements {
            assert_eq!(placement.occupied.len(), 1);
        }
    }

    #[test]
    fn test_failed_verification_places_nothing() {
        // A lone road cell never has the axis companions a footprint of 5
        // needs, and with no fallback the lots stay empty.
        let mut cat = catalog(vec![kind("block", 5, Quota::Limited(1))]);
        let plan = place_structures(&[cell(0, 0)], &mut cat);
        assert!(plan.placements.is_empty());
        assert!(plan.registry.is_empty());
        // The attempt was not consumed.
        assert_eq!(cat.kinds[0].quota, Quota::Limited(1));
    }

    #[test]
    fn test_scan_stops_at_first_eligible_entry() {
        // The wide entry is eligible for every lot, so the catalog scan ends
        // there even when verification fails: the unlimited house below is
        // never reached. Greedy stop-on-first-match, not stop-on-first-success.
        let mut cat = catalog(vec![
            kind("block", 5, Quota::Limited(4)),
            kind("house", 1, Quota::Unlimited),
        ]);
        let plan = place_structures(&[cell(0, 0)], &mut cat);
        assert!(plan.placements.is_empty());
        assert_eq!(cat.kinds[0].quota, Quota::Limited(4));
    }

    #[test]
    fn test_registry_cells_never_overlap() {
        let roads = horizontal_road(10);
        let mut cat = catalog(vec![
            kind("block", 5, Quota::Limited(3)),
            kind("house", 1, Quota::Unlimited),
        ]);
        let plan = place_structures(&roads, &mut cat);

        let mut seen: HashSet<IVec3> = HashSet::new();
        for placement in &plan.placements {
            for occupied in &placement.occupied {
                assert!(seen.insert(*occupied), "{occupied} claimed twice");
            }
        }
        // Registry and placements agree exactly.
        assert_eq!(seen.len(), plan.registry.len());
    }

    #[test]
    fn test_blocked_lot_is_skipped_without_consuming_quota() {
        // The first wide placement blocks lots that come later in discovery
        // order; those must be skipped before the catalog is consulted.
        let roads = horizontal_road(8);
        let mut cat = catalog(vec![kind("block", 5, Quota::Limited(10))]);
        let plan = place_structures(&roads, &mut cat);

        let anchors: HashSet<IVec3> =
            plan.placements.iter().map(|p| p.anchor).collect();
        let extras: HashSet<IVec3> = plan
            .placements
            .iter()
            .flat_map(|p| p.occupied[1..].iter().copied())
            .collect();
        assert!(anchors.is_disjoint(&extras));
        // 10 attempts were allowed but only the successful ones consumed.
        let Quota::Limited(left) = cat.kinds[0].quota else {
            panic!("quota variant changed");
        };
        assert_eq!(left as usize, 10 - plan.placements.len());
    }

    #[test]
    fn test_companion_claimed_by_earlier_placement_fails() {
        // (0,1) takes the shop first. The wide block anchored at (1,1) would
        // need (0,1) as a companion and must fail rather than register the
        // cell under a second handle; it lands at (1,-1) instead.
        let roads = horizontal_road(4);
        let mut cat = catalog(vec![
            kind("shop", 1, Quota::Limited(1)),
            kind("block", 5, Quota::Limited(1)),
        ]);
        let plan = place_structures(&roads, &mut cat);

        assert_eq!(plan.placements.len(), 2);
        assert_eq!(plan.placements[0].anchor, cell(0, 1));
        assert_eq!(plan.placements[0].kind, 0);
        assert_eq!(plan.placements[1].anchor, cell(1, -1));
        assert_eq!(plan.placements[1].kind, 1);
        assert!(!plan.registry.contains_key(&cell(1, 1)));
    }

    #[test]
    fn test_catalog_fallback_ordering_check() {
        assert!(StructureCatalog::default().is_fallback_ordered());
        let bad = catalog(vec![
            kind("house", 1, Quota::Unlimited),
            kind("shop", 1, Quota::Limited(3)),
        ]);
        assert!(!bad.is_fallback_ordered());
        let no_fallback = catalog(vec![kind("shop", 1, Quota::Limited(3))]);
        assert!(no_fallback.is_fallback_ordered());
    }

    #[test]
    fn test_relayout_spawns_entities_and_registry() {
        let mut app = App::new();
        let mut roads = RoadNetwork::default();
        for road in horizontal_road(3) {
            roads.place_road(road);
        }
        app.insert_resource(roads)
            .insert_resource(StructureCatalog::default())
            .init_resource::<StructureRegistry>()
            .init_resource::<PlacementStats>()
            .add_systems(Update, relayout_structures);
        app.update();

        let mut structures = app.world_mut().query::<&Structure>();
        let spawned = structures.iter(app.world()).count();
        assert!(spawned > 0);
        let registry = app.world().resource::<StructureRegistry>();
        assert!(registry.0.len() >= spawned);
        let stats = app.world().resource::<PlacementStats>();
        assert_eq!(stats.counts.iter().sum::<u32>() as usize, spawned);

        // A road edit triggers a full relayout rather than leaking the old
        // entities.
        app.world_mut()
            .resource_mut::<RoadNetwork>()
            .place_road(cell(0, 5));
        app.update();
        let mut structures = app.world_mut().query::<&Structure>();
        let respawned = structures.iter(app.world()).count();
        let registry = app.world().resource::<StructureRegistry>();
        assert!(registry.0.len() >= respawned);
    }
}
