use cardface_core::{
    compose, compose_deck, Card, CardComposer, Color, ComposeError, Role, SpriteCatalog, Suit,
    BACK_DRAW_ORDER,
};
use cardface_data::{load_assets, DeckAssets};
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

fn assets() -> DeckAssets {
    load_assets(&assets_root()).expect("load assets")
}

fn count(card: &Card, role: Role) -> usize {
    card.elements_with_role(role).count()
}

macro_rules! pip_count_case {
    ($name:ident, $rank:expr) => {
        #[test]
        fn $name() {
            let assets = assets();
            for suit in Suit::ALL {
                let card = compose(suit, $rank, &assets.table, &assets.sprites).expect("compose");
                let expected = assets.table.get($rank).expect("definition").pips.len();
                assert_eq!(expected, $rank as usize);
                let labels: Vec<&str> = card
                    .elements_with_role(Role::Pip)
                    .map(|e| e.label.as_str())
                    .collect();
                let want: Vec<String> = (0..expected).map(|i| format!("pip_{i}")).collect();
                assert_eq!(labels, want);
                assert_eq!(count(&card, Role::Face), 0);
            }
        }
    };
}

pip_count_case!(pips_for_two, 2);
pip_count_case!(pips_for_three, 3);
pip_count_case!(pips_for_four, 4);
pip_count_case!(pips_for_five, 5);
pip_count_case!(pips_for_six, 6);
pip_count_case!(pips_for_seven, 7);
pip_count_case!(pips_for_eight, 8);
pip_count_case!(pips_for_nine, 9);
pip_count_case!(pips_for_ten, 10);

#[test]
fn bundled_assets_have_no_warnings() {
    assert!(assets().warnings.is_empty());
}

#[test]
fn every_card_has_one_back_on_top() {
    let assets = assets();
    let deck = compose_deck(&CardComposer::new(&assets.sprites), &assets.table).expect("deck");
    assert_eq!(deck.len(), 52);
    for card in &deck {
        assert_eq!(count(card, Role::Back), 1, "{}", card.name());
        let back = card.elements().last().expect("elements");
        assert_eq!(back.role, Role::Back);
        assert_eq!(back.draw_order, BACK_DRAW_ORDER);
        assert_eq!(back.sprite_key, "Card_Back");
        assert!(card
            .elements()
            .iter()
            .filter(|e| e.role != Role::Back)
            .all(|e| e.draw_order < back.draw_order));
    }
}

#[test]
fn deck_order_is_suit_then_rank() {
    let assets = assets();
    let deck = compose_deck(&CardComposer::new(&assets.sprites), &assets.table).expect("deck");
    let names: Vec<String> = deck.iter().take(14).map(|card| card.name()).collect();
    assert_eq!(names[0], "C1");
    assert_eq!(names[12], "C13");
    assert_eq!(names[13], "D1");
}

#[test]
fn ace_keeps_pip_scale() {
    let assets = assets();
    let card = compose(Suit::Spades, 1, &assets.table, &assets.sprites).expect("compose");
    let pips: Vec<_> = card.elements_with_role(Role::Pip).collect();
    assert_eq!(pips.len(), 1);
    assert_eq!(pips[0].scale, 3.0);
    assert_eq!(pips[0].sprite_key, "Suit_Spade");
    assert_eq!(pips[0].label, "pip_0");
}

#[test]
fn face_ranks_emit_face_art() {
    let assets = assets();
    for rank in 11..=13 {
        for suit in Suit::ALL {
            let card = compose(suit, rank, &assets.table, &assets.sprites).expect("compose");
            let faces: Vec<_> = card.elements_with_role(Role::Face).collect();
            assert_eq!(faces.len(), 1);
            assert_eq!(faces[0].sprite_key, format!("FaceCard_{rank}{}", suit.letter()));
            assert_eq!(count(&card, Role::Pip), 0);
        }
    }
}

#[test]
fn missing_face_art_is_skipped() {
    let assets = assets();
    let sprites = SpriteCatalog::default();
    for rank in 11..=13 {
        let card = compose(Suit::Hearts, rank, &assets.table, &sprites).expect("compose");
        assert_eq!(count(&card, Role::Face), 0);
        assert_eq!(count(&card, Role::Back), 1);
        assert_eq!(count(&card, Role::RankDecorator), 2);
    }
}

#[test]
fn color_follows_suit() {
    let assets = assets();
    for rank in 1..=13 {
        let diamonds = compose(Suit::Diamonds, rank, &assets.table, &assets.sprites).expect("D");
        let spades = compose(Suit::Spades, rank, &assets.table, &assets.sprites).expect("S");
        assert_eq!(diamonds.color(), Color::Red);
        assert_eq!(spades.color(), Color::Black);
        assert!(diamonds
            .elements_with_role(Role::RankDecorator)
            .all(|e| e.tint == Some(Color::Red)));
    }
}

#[test]
fn decorator_count_is_constant() {
    let assets = assets();
    let expected = assets.table.decorator_placements().len();
    assert_eq!(expected, 4);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            let card = compose(suit, rank, &assets.table, &assets.sprites).expect("compose");
            let decorators =
                count(&card, Role::SuitDecorator) + count(&card, Role::RankDecorator);
            assert_eq!(decorators, expected);
        }
    }
}

#[test]
fn rank_decorators_use_rank_sprites() {
    let assets = assets();
    let card = compose(Suit::Clubs, 12, &assets.table, &assets.sprites).expect("compose");
    assert!(card
        .elements_with_role(Role::RankDecorator)
        .all(|e| e.sprite_key == "Letter_Q"));
    assert!(card
        .elements_with_role(Role::SuitDecorator)
        .all(|e| e.sprite_key == "Suit_Club"));
}

#[test]
fn face_up_toggle_leaves_elements_alone() {
    let assets = assets();
    let mut card = compose(Suit::Hearts, 7, &assets.table, &assets.sprites).expect("compose");
    let before = card.elements().to_vec();
    assert!(card.face_up());
    for face_up in [false, false, true, false, true, true] {
        card.set_face_up(face_up);
        assert_eq!(card.face_up(), face_up);
        assert_eq!(card.back_visible(), !face_up);
    }
    assert_eq!(card.elements(), before.as_slice());
}

#[test]
fn face_down_composer_shows_only_back() {
    let assets = assets();
    let card = CardComposer::new(&assets.sprites)
        .face_up(false)
        .compose(Suit::Diamonds, 9, &assets.table)
        .expect("compose");
    let visible: Vec<Role> = card.visible_elements().map(|e| e.role).collect();
    assert_eq!(visible, vec![Role::Back]);
}

#[test]
fn invalid_ranks_fail_without_a_card() {
    let assets = assets();
    for rank in [0, 14, -1] {
        let result = compose(Suit::Clubs, rank, &assets.table, &assets.sprites);
        assert!(matches!(result, Err(ComposeError::InvalidArgument(_))));
    }
}

#[test]
fn composing_is_deterministic() {
    let assets = assets();
    let first = compose(Suit::Hearts, 10, &assets.table, &assets.sprites).expect("first");
    let second = compose(Suit::Hearts, 10, &assets.table, &assets.sprites).expect("second");
    assert_eq!(first, second);
}
