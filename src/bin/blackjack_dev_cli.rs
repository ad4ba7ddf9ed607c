// src/bin/blackjack_dev_cli.rs

use std::env;

use blackjack_engine::api::{build_table_view, TableViewDto};
use blackjack_engine::domain::{Chips, Player, PlayerConfig, TableConfig};
use blackjack_engine::engine::{lock_player, GameError, PlayerAction, Table};
use blackjack_engine::infra::{load_table_config, SystemRng};

fn main() {
    env_logger::init();
    println!("blackjack_dev_cli: стартуем dev-CLI одного стола…");

    // 1. Конфиг: путь к JSON первым аргументом, иначе по умолчанию (6 колод).
    let config = match env::args().nth(1) {
        Some(path) => match load_table_config(&path) {
            Ok(c) => c,
            Err(e) => {
                println!("[CLI] ОШИБКА конфига {path}: {e}");
                return;
            }
        },
        None => TableConfig::default(),
    };

    // 2. Стол со свежим шузом
    let mut rng = SystemRng;
    let mut table = match Table::new(config, &mut rng) {
        Ok(t) => t,
        Err(e) => {
            println!("[CLI] ОШИБКА создания стола: {e}");
            return;
        }
    };

    // 3. Рассадка
    for name in ["One", "Two"] {
        let config = PlayerConfig::new(name)
            .with_bet(Chips::new(100))
            .with_wallet(Chips::new(500));
        match table.join(Player::shared(config)) {
            Ok(seat) => println!("[CLI] {name} сел на место {seat}"),
            Err(e) => println!("[CLI] {name} не смог сесть: {e}"),
        }
    }

    println!();
    println!("================ ROUND =================");

    if let Err(e) = run_round(&mut table) {
        println!("[CLI] ОШИБКА в раунде: {e}");
    }

    print_table(&table, true);
    println!("============ END ROUND ============");
}

/// Полный раунд: раздача, ходы по простой стратегии, добор дилера.
fn run_round(table: &mut Table) -> Result<(), GameError> {
    const MAX_STEPS: u32 = 100;

    table.start()?;
    print_table(table, false);

    let mut step: u32 = 0;
    while let Some(player) = table.turn_player() {
        step += 1;
        if step > MAX_STEPS {
            println!("[CLI] Превышен лимит шагов ({MAX_STEPS}), выходим.");
            break;
        }

        let action = {
            let p = lock_player(&player)?;
            let total = p.hands().active_hand().map(|h| h.total()).unwrap_or_default();
            pick_action(p.can_split(), p.can_double_down(), total)
        };

        println!(
            "[CLI] [step={}] seat={:?} -> {:?}",
            step,
            table.turn_seat(),
            action
        );
        table.apply_action(action)?;
    }

    let dealer_total = table.finish_dealer()?;
    println!("[CLI] Дилер остановился на {dealer_total}");
    Ok(())
}

/// Простейшая стратегия: сплит пары, дабл на 9–11, добор ниже 17.
fn pick_action(can_split: bool, can_double_down: bool, total: u32) -> PlayerAction {
    if can_split {
        PlayerAction::Split
    } else if can_double_down {
        PlayerAction::DoubleDown
    } else if total < 17 {
        PlayerAction::Hit
    } else {
        PlayerAction::Stand
    }
}

fn print_table(table: &Table, reveal_dealer: bool) {
    let view: TableViewDto = match build_table_view(table, reveal_dealer) {
        Ok(v) => v,
        Err(e) => {
            println!("[CLI] ОШИБКА build_table_view: {e:?}");
            return;
        }
    };

    let dealer_cards: Vec<String> = view.dealer.cards.iter().map(|c| c.to_string()).collect();
    println!(
        "  dealer: [{}] +{} hidden | total={:?}",
        dealer_cards.join(" "),
        view.dealer.hidden_cards,
        view.dealer.total
    );

    for p in &view.players {
        for (i, hand) in p.hands.iter().enumerate() {
            let cards: Vec<String> = hand.cards.iter().map(|c| c.to_string()).collect();
            println!(
                "  seat={} {} hand#{} [{}] total={} bet={} wallet={}{}",
                p.seat_index,
                p.name,
                i + 1,
                cards.join(" "),
                hand.total,
                hand.bet,
                p.wallet,
                if hand.is_bust { " BUST" } else { "" }
            );
        }
    }

    println!(
        "  state={:?} turn={:?} shoe={}",
        view.state, view.turn_seat, view.shoe_remaining
    );
}
