//! End-to-end socketing passes against the simulated session.
//!
//! Config → catalog → SocketingPass → SimulatedGame, checking what ends up
//! in the stash and in which order the game was driven.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sockforge_core::UnitId;
    use sockforge_engine::{
        EnabledRecipes, InteractionError, InventoryQuery, RecipeState, SocketingError,
        SocketingOptions, SocketingPass,
    };
    use sockforge_items::{Item, StatId, StorageLocation};
    use sockforge_recipes::RecipeCatalog;

    use crate::config::Config;
    use crate::simulated::{SimAction, SimulatedGame};

    fn options() -> SocketingOptions {
        SocketingOptions {
            settle_delay: Duration::from_millis(300),
            max_applications_per_recipe: 16,
        }
    }

    fn rune(id: u32, name: &str) -> Item {
        Item::new(id, name, "Rune", StorageLocation::Stash)
    }

    fn white(id: u32, type_name: &str, sockets: i32) -> Item {
        Item::new(id, type_name, type_name, StorageLocation::Stash)
            .with_stat(StatId::Defense, 60)
            .with_stat(StatId::Durability, 20)
            .with_stat(StatId::NumSockets, sockets)
    }

    fn stash_ids(game: &SimulatedGame) -> Vec<u32> {
        let mut ids: Vec<u32> = game
            .items_in(&StorageLocation::STASH_CLASS)
            .into_iter()
            .map(|i| i.unit_id.get())
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn tirtir_consumes_helm_and_both_runes_then_halts() {
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            rune(10, "TirRune"),
            white(1, "Helm", 2),
            rune(11, "TirRune"),
        ]);
        let enabled = EnabledRecipes::new(["TirTir"]);
        let pass = SocketingPass::with_options(&catalog, options());

        let report = pass.run(&mut game, &enabled).unwrap();

        let tirtir = report.outcome("TirTir").unwrap();
        assert_eq!(tirtir.state, RecipeState::Exhausted);
        assert_eq!(tirtir.applications.len(), 1);
        assert_eq!(tirtir.applications[0].base, UnitId::new(1));
        assert_eq!(tirtir.applications[0].inserts, vec![UnitId::new(10), UnitId::new(11)]);

        // Runes are gone, the socketed helm is back in the stash.
        assert!(game.item(UnitId::new(10)).is_none());
        assert!(game.item(UnitId::new(11)).is_none());
        assert_eq!(game.filled_sockets(UnitId::new(1)), 2);
        assert_eq!(stash_ids(&game), vec![1]);

        // Second pass over the same storage finds nothing to do.
        let clicks_before = game.clicks();
        let again = pass.run(&mut game, &enabled).unwrap();
        assert_eq!(again.total_applications(), 0);
        assert_eq!(game.clicks(), clicks_before);
    }

    #[test]
    fn helm_with_added_lightning_resist_is_never_used() {
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            white(1, "Helm", 2).with_stat(StatId::LightningResist, 25),
            rune(10, "TirRune"),
            rune(11, "TirRune"),
        ]);

        let report = SocketingPass::with_options(&catalog, options())
            .run(&mut game, &EnabledRecipes::new(["TirTir"]))
            .unwrap();

        assert_eq!(report.total_applications(), 0);
        assert!(game.actions().is_empty());
        assert_eq!(stash_ids(&game), vec![1, 10, 11]);
    }

    #[test]
    fn auric_shield_with_innate_resists_takes_spirit() {
        let catalog = RecipeCatalog::standard();
        let shield = white(1, "Auric Shields", 4)
            .with_stat(StatId::ColdResist, 40)
            .with_stat(StatId::FireResist, 40)
            .with_stat(StatId::LightningResist, 40)
            .with_stat(StatId::PoisonResist, 40);
        let mut game = SimulatedGame::new(vec![
            rune(10, "AmnRune"),
            rune(11, "OrtRune"),
            shield,
            rune(12, "ThulRune"),
            rune(13, "TalRune"),
        ]);

        let report = SocketingPass::with_options(&catalog, options())
            .run(&mut game, &EnabledRecipes::new(["Spirit shield"]))
            .unwrap();

        let spirit = report.outcome("Spirit shield").unwrap();
        assert_eq!(spirit.applications.len(), 1);
        // Tal, Thul, Ort, Amn regardless of stash order.
        assert_eq!(
            spirit.applications[0].inserts,
            vec![UnitId::new(13), UnitId::new(12), UnitId::new(11), UnitId::new(10)]
        );
        assert_eq!(game.filled_sockets(UnitId::new(1)), 4);
    }

    #[test]
    fn click_sequence_is_insert_delay_base_then_close() {
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            white(1, "Helm", 2),
            rune(10, "SolRune"),
            rune(11, "OrtRune"),
        ]);

        SocketingPass::with_options(&catalog, options())
            .run(&mut game, &EnabledRecipes::new(["Lore"]))
            .unwrap();

        let delay = Duration::from_millis(300);
        let kinds: Vec<String> = game
            .actions()
            .iter()
            .map(|a| match a {
                SimAction::TakeFromStash(ids) => {
                    format!("take {:?}", ids.iter().map(|i| i.get()).collect::<Vec<_>>())
                }
                SimAction::StashInventory => "stash".to_string(),
                SimAction::Click { target, .. } => {
                    format!("click {}", target.map(|t| t.get()).unwrap_or(0))
                }
                SimAction::Sleep(d) if *d == delay => "sleep".to_string(),
                SimAction::Sleep(d) => format!("sleep {d:?}"),
                SimAction::CloseMenus => "close".to_string(),
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "take [1]",
                "take [10, 11]",
                "click 11",
                "sleep",
                "click 1",
                "click 10",
                "sleep",
                "click 1",
                "sleep",
                "close",
                "stash",
            ]
        );
    }

    #[test]
    fn contested_runes_go_to_the_earlier_recipe() {
        // Lore (priority 3) and Insight (priority 8) both need a SolRune.
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            white(1, "Polearm", 4),
            white(2, "Helm", 2),
            rune(10, "RalRune"),
            rune(11, "TirRune"),
            rune(12, "TalRune"),
            rune(13, "SolRune"),
            rune(14, "OrtRune"),
        ]);

        let report = SocketingPass::with_options(&catalog, options())
            .run(&mut game, &EnabledRecipes::new(["Insight", "Lore"]))
            .unwrap();

        assert_eq!(report.applied_recipes().collect::<Vec<_>>(), vec!["Lore"]);
        assert_eq!(game.filled_sockets(UnitId::new(2)), 2);
        assert_eq!(game.filled_sockets(UnitId::new(1)), 0);
        assert_eq!(stash_ids(&game), vec![1, 2, 10, 11, 12]);
    }

    #[test]
    fn rune_stats_carry_over_and_base_is_not_reused() {
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            white(1, "Armor", 2),
            rune(10, "TalRune").with_stat(StatId::PoisonResist, 30),
            rune(11, "EthRune"),
            rune(12, "TalRune").with_stat(StatId::PoisonResist, 30),
            rune(13, "EthRune"),
        ]);

        let report = SocketingPass::with_options(&catalog, options())
            .run(&mut game, &EnabledRecipes::new(["Stealth"]))
            .unwrap();

        assert_eq!(report.total_applications(), 1);
        assert_eq!(stash_ids(&game), vec![1, 12, 13]);
        assert!(game.item(UnitId::new(1)).unwrap().stat(StatId::PoisonResist, 0).is_some());
    }

    #[test]
    fn filled_base_with_statless_runes_is_a_clean_miss() {
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            Item::new(1, "Cap", "Helm", StorageLocation::Stash).with_stat(StatId::NumSockets, 2),
            rune(10, "TirRune"),
            rune(11, "TirRune"),
            rune(12, "TirRune"),
            rune(13, "TirRune"),
        ]);

        let report = SocketingPass::with_options(&catalog, options())
            .run(&mut game, &EnabledRecipes::new(["TirTir"]))
            .unwrap();

        let tirtir = report.outcome("TirTir").unwrap();
        assert_eq!(tirtir.applications.len(), 1);
        assert_eq!(tirtir.state, RecipeState::Exhausted);
        assert_eq!(game.filled_sockets(UnitId::new(1)), 2);
        assert_eq!(stash_ids(&game), vec![1, 12, 13]);
    }

    #[test]
    fn click_failure_aborts_the_pass() {
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            white(1, "Helm", 2),
            rune(10, "TirRune"),
            rune(11, "TirRune"),
            white(2, "Staff", 2),
            rune(12, "TirRune"),
            rune(13, "RalRune"),
        ])
        .fail_click_at(3);

        let err = SocketingPass::with_options(&catalog, options())
            .run(&mut game, &EnabledRecipes::new(["TirTir", "Leaf"]))
            .unwrap_err();

        assert!(matches!(
            err,
            SocketingError::Interaction(InteractionError::Click { ref reason, .. })
                if reason == "injected failure"
        ));
        // One rune was socketed before the failure; nothing else ran.
        assert_eq!(game.filled_sockets(UnitId::new(1)), 1);
        assert!(!game.actions().contains(&SimAction::CloseMenus));
        assert!(game.item(UnitId::new(12)).is_some());
        assert!(game.item(UnitId::new(13)).is_some());
    }

    #[test]
    fn config_drives_which_recipes_run() {
        let config = Config::from_json(
            r#"{
                "characters": {
                    "hammerdin": {
                        "socket_recipes": { "enabled": ["Leaf", "NotARecipe"] },
                        "settle_delay_ms": 10
                    }
                }
            }"#,
        )
        .unwrap();
        let character = config.character("hammerdin").unwrap();
        let catalog = RecipeCatalog::standard();
        let mut game = SimulatedGame::new(vec![
            white(1, "Helm", 2),
            rune(10, "TirRune"),
            rune(11, "TirRune"),
            white(2, "Staff", 2),
            rune(12, "RalRune"),
        ]);

        let report = SocketingPass::with_options(&catalog, character.socketing_options())
            .run(&mut game, character.enabled_recipes())
            .unwrap();

        // TirTir is not enabled, so Leaf gets the first TirRune.
        assert_eq!(report.outcomes.len(), 1);
        let leaf = report.outcome("Leaf").unwrap();
        assert_eq!(leaf.applications[0].inserts, vec![UnitId::new(10), UnitId::new(12)]);
        assert!(game.actions().contains(&SimAction::Sleep(Duration::from_millis(10))));
    }
}
