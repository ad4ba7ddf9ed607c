//! Интеграционные тесты для доменной модели (crate::domain).

use blackjack_engine::domain::*;
use blackjack_engine::engine::GameError;

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| c(s)).collect()
}

fn hand(list: &[&str]) -> Hand {
    Hand::new(cards(list), Chips(100), true)
}

/// Card/Suit/Rank: Display + FromStr.
#[test]
fn card_display_and_parse() {
    let card = Card::new(Rank::Ace, Suit::Hearts);
    assert_eq!(card.to_string(), "Ah");
    assert_eq!(c("Td"), Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(c("7c").to_string(), "7c");

    assert!("".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

#[test]
fn rank_blackjack_values() {
    assert_eq!(Rank::Two.blackjack_value(), 2);
    assert_eq!(Rank::Nine.blackjack_value(), 9);
    assert_eq!(Rank::Ten.blackjack_value(), 10);
    assert_eq!(Rank::Jack.blackjack_value(), 10);
    assert_eq!(Rank::Queen.blackjack_value(), 10);
    assert_eq!(Rank::King.blackjack_value(), 10);
    assert_eq!(Rank::Ace.blackjack_value(), 1);
}

//
// Shoe
//
#[test]
fn shoe_unshuffled_has_all_decks() {
    let shoe = Shoe::unshuffled(6);
    assert_eq!(shoe.len(), 6 * CARDS_PER_DECK);

    let aces = shoe.cards().iter().filter(|c| c.is_ace()).count();
    assert_eq!(aces, 24);
}

#[test]
fn shoe_draw_is_pure_and_takes_from_tail() {
    let shoe = Shoe::from_cards(cards(&["2h", "3h", "4h", "5h"]));

    let (drawn, remaining) = shoe.draw(2);
    assert_eq!(drawn, cards(&["4h", "5h"]));
    assert_eq!(remaining.cards(), cards(&["2h", "3h"]).as_slice());

    // исходный шуз не тронут
    assert_eq!(shoe.len(), 4);

    // больше, чем есть – забираем всё
    let (drawn, remaining) = remaining.draw(5);
    assert_eq!(drawn.len(), 2);
    assert!(remaining.is_empty());

    let (drawn, _) = remaining.draw(1);
    assert!(drawn.is_empty());
}

//
// Hand::total
//
#[test]
fn hand_total_basic_cases() {
    assert_eq!(hand(&["Qs", "Jh", "Ac"]).total(), 21);
    assert_eq!(hand(&["2s", "3h"]).total(), 5);
    assert_eq!(hand(&["As"]).total(), 11);
    assert_eq!(hand(&["Ks", "Qh"]).total(), 20);
    assert_eq!(hand(&[]).total(), 0);
}

#[test]
fn hand_total_is_order_independent() {
    let perms = [
        ["Ah", "5s", "Kd"],
        ["Ah", "Kd", "5s"],
        ["5s", "Ah", "Kd"],
        ["5s", "Kd", "Ah"],
        ["Kd", "Ah", "5s"],
        ["Kd", "5s", "Ah"],
    ];

    for p in perms {
        assert_eq!(hand(&p).total(), 16, "permutation {p:?}");
    }

    let soft = [["Ah", "3s", "4d"], ["4d", "3s", "Ah"], ["3s", "Ah", "4d"]];
    for p in soft {
        assert_eq!(hand(&p).total(), 18, "permutation {p:?}");
    }
}

#[test]
fn hand_total_single_ace_counts_eleven_when_rest_is_at_most_ten() {
    let rests: [&[&str]; 5] = [&["2h"], &["9c"], &["Td"], &["3s", "4c"], &["2d", "2c", "6h"]];
    for rest in rests {
        let mut list = vec!["Ah"];
        list.extend_from_slice(rest);
        let base: u32 = cards(rest).iter().map(Card::value).sum();
        assert!(base <= 10);
        assert_eq!(hand(&list).total(), base + 11, "hand {list:?}");
    }
}

#[test]
fn hand_total_never_promotes_two_aces() {
    assert_eq!(hand(&["Ah", "As"]).total(), 12);
    assert_eq!(hand(&["Ah", "As", "9c"]).total(), 21);
    assert_eq!(hand(&["Ah", "As", "Ac", "Ad"]).total(), 14);
    assert_eq!(hand(&["Ah", "As", "Ac", "Ad", "7h"]).total(), 21);
    assert_eq!(hand(&["Ah", "As", "Kc"]).total(), 12);
    assert_eq!(hand(&["Ah", "Ks", "5c"]).total(), 16);
}

#[test]
fn hand_bust_and_blackjack() {
    assert!(hand(&["Ks", "Qh", "2c"]).is_bust());
    assert!(!hand(&["Ks", "Qh", "Ac"]).is_bust());

    assert!(hand(&["Ts", "Ah"]).has_blackjack());
    assert!(hand(&["Ah", "Ks"]).has_blackjack());
    assert!(!hand(&["Ts", "Th"]).has_blackjack());
    // 21 на трёх картах – не блэкджек
    assert!(!hand(&["Ts", "9h", "2h"]).has_blackjack());
}

#[test]
fn hand_can_split_only_equal_rank_pair() {
    assert!(hand(&["Ts", "Th"]).can_split());
    assert!(hand(&["As", "Ad"]).can_split());
    // король и дама – обе по 10, но ранг разный
    assert!(!hand(&["Ks", "Qh"]).can_split());
    assert!(!hand(&["2s", "3h"]).can_split());
    assert!(!hand(&["2s", "2h", "3h"]).can_split());
    assert!(!hand(&["2s"]).can_split());
}

#[test]
fn hand_can_double_down_on_two_card_nine_to_eleven() {
    assert!(hand(&["5s", "4h"]).can_double_down());
    assert!(hand(&["6s", "4h"]).can_double_down());
    assert!(hand(&["9s", "2h"]).can_double_down());

    assert!(!hand(&["5s", "3h"]).can_double_down());
    assert!(!hand(&["Ts", "2h"]).can_double_down());
    // мягкие 19 и 21 – вне окна
    assert!(!hand(&["As", "8h"]).can_double_down());
    // 10 на трёх картах
    assert!(!hand(&["2s", "3h", "5c"]).can_double_down());
}

#[test]
fn hand_split_produces_two_one_card_hands() {
    let h = hand(&["Ts", "Th"]);
    let split = h.split().expect("pair can split");

    assert_eq!(split, Hands::split_pair(c("Ts"), c("Th"), Chips(100)));
    assert_eq!(split.mode(), HandsMode::Split);
    assert_eq!(split.first().cards(), cards(&["Ts"]).as_slice());
    assert_eq!(split.first().bet(), Chips(100));
    assert_eq!(split.second().map(Hand::bet), Some(Chips(100)));
    assert_eq!(split.active(), ActiveHand::First);

    assert_eq!(hand(&["Ts", "9h"]).split(), Err(GameError::SplitNotAllowed));
}

//
// Hands
//
#[test]
fn hands_new_is_normal_with_first_active() {
    let h = Hands::new(cards(&["Ts", "2h"]), Chips(200));

    assert_eq!(h.mode(), HandsMode::Normal);
    assert!(h.second().is_none());
    assert_eq!(h.active(), ActiveHand::First);
    assert_eq!(h.active_hand(), Some(h.first()));
    assert!(h.first().is_active());
}

#[test]
fn hands_hit_goes_to_active_hand() {
    let mut h = Hands::new(cards(&["Ts", "2h"]), Chips(0));
    h.hit(c("5c"));
    assert_eq!(h.first().cards(), cards(&["Ts", "2h", "5c"]).as_slice());

    let mut split = Hands::split_pair(c("8s"), c("8h"), Chips(10));
    split.stand();
    split.hit(c("3d"));
    assert_eq!(split.first().cards(), cards(&["8s"]).as_slice());
    assert_eq!(
        split.second().map(|h| h.cards().to_vec()),
        Some(cards(&["8h", "3d"]))
    );
}

#[test]
fn hands_hit_when_done_is_ignored() {
    let mut h = Hands::new(cards(&["Ts", "2h"]), Chips(0));
    h.stand();
    h.hit(c("5c"));
    assert_eq!(h.first().cards().len(), 2);
}

#[test]
fn hands_stand_normal_mode_finishes_and_stays_finished() {
    let mut h = Hands::new(cards(&["Ts", "2h"]), Chips(0));

    h.stand();
    assert_eq!(h.active(), ActiveHand::None);
    assert!(h.is_done());
    assert!(!h.first().is_active());

    h.stand();
    assert_eq!(h.active(), ActiveHand::None);
}

#[test]
fn hands_stand_split_mode_moves_to_second_then_finishes() {
    let mut h = Hands::split_pair(c("8s"), c("8h"), Chips(10));

    h.stand();
    assert_eq!(h.active(), ActiveHand::Second);
    assert!(!h.first().is_active());
    assert!(h.second().is_some_and(Hand::is_active));
    assert!(!h.is_done());

    h.stand();
    assert_eq!(h.active(), ActiveHand::None);
    assert!(!h.second().is_some_and(Hand::is_active));
    assert!(h.is_done());
}

#[test]
fn hands_split_only_once() {
    let h = Hands::new(cards(&["8s", "8h"]), Chips(50));
    assert!(h.can_split());

    let mut split = h.split().expect("first split allowed");
    // даже если первая рука снова стала парой
    split.hit(c("8d"));
    assert!(split.first().can_split());
    assert!(!split.can_split());
    assert_eq!(split.split(), Err(GameError::SplitNotAllowed));
}

#[test]
fn hands_queries_follow_active_hand() {
    let mut h = Hands::new(cards(&["Ks", "Qh"]), Chips(0));
    assert!(!h.is_bust());
    h.hit(c("5c"));
    assert!(h.is_bust());
    h.stand();
    // после окончания хода активной руки нет
    assert!(!h.is_bust());
    assert!(!h.can_double_down());
    assert!(!h.can_split());

    let bj = Hands::new(cards(&["As", "Kh"]), Chips(0));
    assert!(bj.has_blackjack());

    let split = Hands::split_pair(c("As"), c("Ad"), Chips(0));
    assert!(!split.has_blackjack());
}

//
// Dealer
//
#[test]
fn dealer_draws_six_seven_queen() {
    let mut d = Dealer::new();
    let shoe = Shoe::from_cards(cards(&["Jh", "Qs", "7s", "6c"]));

    let remaining = d.draw_until_threshold(shoe);

    assert_eq!(d.cards(), cards(&["6c", "7s", "Qs"]).as_slice());
    assert_eq!(remaining.cards(), cards(&["Jh"]).as_slice());
    assert_eq!(d.total(), 23);
}

#[test]
fn dealer_draws_ace_six() {
    let mut d = Dealer::new();
    let shoe = Shoe::from_cards(cards(&["Qs", "6c", "As"]));

    let remaining = d.draw_until_threshold(shoe);

    assert_eq!(d.cards(), cards(&["As", "6c"]).as_slice());
    assert_eq!(remaining.cards(), cards(&["Qs"]).as_slice());
    assert_eq!(d.total(), 17);
}

#[test]
fn dealer_stops_at_sixteen() {
    let mut d = Dealer::new();
    d.hit(c("Th"));
    d.hit(c("6s"));

    let remaining = d.draw_until_threshold(Shoe::from_cards(cards(&["2c"])));
    assert_eq!(d.total(), DEALER_DRAW_THRESHOLD);
    assert_eq!(remaining.len(), 1);

    let mut d = Dealer::new();
    d.hit(c("Th"));
    d.hit(c("5s"));
    let remaining = d.draw_until_threshold(Shoe::from_cards(cards(&["2c"])));
    assert_eq!(d.total(), 17);
    assert!(remaining.is_empty());
}

#[test]
fn dealer_stops_on_empty_shoe() {
    let mut d = Dealer::new();
    d.hit(c("2h"));
    let remaining = d.draw_until_threshold(Shoe::from_cards(cards(&["3c"])));
    assert_eq!(d.total(), 5);
    assert!(remaining.is_empty());
    assert_eq!(d.up_card(), Some(c("2h")));
}

//
// Player
//
fn player_with(list: &[&str], bet: u64, wallet: u64) -> Player {
    let mut p = Player::new(
        PlayerConfig::new("Test")
            .with_bet(Chips(bet))
            .with_wallet(Chips(wallet)),
    );
    for card in cards(list) {
        p.hit(card);
    }
    p
}

#[test]
fn player_new_from_config() {
    let p = Player::new(PlayerConfig::new("Test").with_bet(Chips(200)));

    assert_eq!(p.name(), "Test");
    assert_eq!(p.wallet(), Chips::ZERO);
    assert_eq!(p.hands(), &Hands::new(Vec::new(), Chips(200)));
}

#[test]
fn player_eligibility_is_gated_by_wallet() {
    assert!(player_with(&["8s", "8h"], 100, 100).can_split());
    assert!(!player_with(&["8s", "8h"], 100, 99).can_split());

    assert!(player_with(&["5s", "5h"], 100, 100).can_double_down());
    assert!(!player_with(&["5s", "5h"], 100, 0).can_double_down());
    assert!(!player_with(&["Ts", "8h"], 100, 1_000).can_double_down());
}

#[test]
fn player_double_down_debits_and_doubles_bet() {
    let mut p = player_with(&["5s", "4h"], 100, 500);

    p.double_down(c("Kd")).expect("double down on 9");

    assert_eq!(p.wallet(), Chips(400));
    let active = p.hands().active_hand().expect("hand still active until table stands it");
    assert_eq!(active.bet(), Chips(200));
    assert_eq!(active.cards(), cards(&["5s", "4h", "Kd"]).as_slice());
    assert_eq!(active.total(), 19);
}

#[test]
fn player_double_down_refused_without_mutation() {
    let mut p = player_with(&["5s", "4h"], 100, 50);
    let before = p.clone();

    assert_eq!(p.double_down(c("Kd")), Err(GameError::DoubleDownNotAllowed));
    assert_eq!(p, before);
}

#[test]
fn player_split_debits_second_bet() {
    let mut p = player_with(&["8s", "8h"], 100, 150);

    p.split().expect("split pair");

    assert_eq!(p.wallet(), Chips(50));
    assert_eq!(p.hands().mode(), HandsMode::Split);
    assert_eq!(p.hands().iter().count(), 2);
    assert!(!p.can_split());

    let mut poor = player_with(&["8s", "8h"], 100, 10);
    let before = poor.clone();
    assert_eq!(poor.split(), Err(GameError::SplitNotAllowed));
    assert_eq!(poor, before);
}

#[test]
fn player_delegates_state_queries() {
    let mut p = player_with(&["As", "Kh"], 0, 0);
    assert!(p.has_blackjack());
    assert!(!p.is_done());

    p.stand();
    assert!(p.is_done());

    let mut bust = player_with(&["Ks", "Qh"], 0, 0);
    bust.hit(c("2c"));
    assert!(bust.is_bust());
}

//
// Config
//
#[test]
fn table_config_default_and_validate() {
    let cfg = TableConfig::default();
    assert_eq!(cfg.decks, 6);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.shoe(), ShoeConfig { decks: 6 });

    let bad = TableConfig { decks: 0 };
    assert!(matches!(bad.validate(), Err(GameError::InvalidConfig(_))));
}
