use crossterm::cursor::MoveTo;
use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use furlong::betting::{settle, Bet, BetType};
use furlong::constants::*;
use furlong::input::{self, BetTypeChoice};
use furlong::odds::OddsBoard;
use furlong::race::{finishing_order, run_race};
use furlong::session::Session;
use furlong::ui::{format_money, race_scene, results_scene};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

fn main() -> io::Result<()> {
    let mut session = Session::new(STARTING_BALANCE);
    let mut rng = rand::thread_rng();

    loop {
        clear_screen()?;
        println!("🐎  Welcome to the Horse Race Simulator 🏇");
        println!("💰 Current Balance: $ {}\n", format_money(session.balance));

        // Fresh strengths every round so the odds vary game to game
        let board = OddsBoard::generate(NUM_HORSES, &mut rng);
        println!("Tonight's horses and odds:");
        for horse in 0..board.horse_count() {
            println!(
                "  Horse {} {} — {:.2}:1 (Win Chance: {:.1}%)",
                horse + 1,
                HORSE_GLYPHS[horse],
                board.fair_odds(horse),
                board.win_prob(horse) * 100.0
            );
        }

        let bet_type = match prompt_bet_type()? {
            Some(bet_type) => bet_type,
            None => {
                println!("Goodbye!");
                return Ok(());
            }
        };
        let bet = collect_bet(bet_type)?;
        let stake = prompt_stake(&session)?;

        println!(
            "\n📣 Betting $ {} on {}...\n",
            format_money(stake),
            bet_type.name()
        );
        thread::sleep(Duration::from_millis(PRE_RACE_PAUSE_MS));

        let order = run_race_screen(&board, session.balance, &mut rng)?;

        clear_screen()?;
        let recap = order
            .iter()
            .map(|horse| (horse + 1).to_string())
            .collect::<Vec<_>>()
            .join(" → ");
        println!("🏁 Finishing order: {}\n", recap);

        let settlement = settle(&bet, stake, &order, &board);
        session.apply_round(stake, &settlement);

        if settlement.is_win() {
            println!(
                "{} You win $ {} (incl. stake).",
                settlement.message,
                format_money(settlement.payout)
            );
        } else {
            println!("{} You lose $ {}.", settlement.message, format_money(stake));
        }
        println!("💵 New Balance: $ {}\n", format_money(session.balance));

        if session.is_bankrupt() {
            println!("💀 Bankrupt. Game Over.");
            return Ok(());
        }

        if !prompt_play_again()? {
            println!("👋 Thanks for playing!");
            return Ok(());
        }
    }
}

/// Runs the animated race in the alternate screen and returns the finishing
/// order. Shows the results scene until a key is pressed, then restores the
/// normal screen.
fn run_race_screen(
    board: &OddsBoard,
    balance: f64,
    rng: &mut impl Rng,
) -> io::Result<Vec<usize>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let positions = run_race(NUM_HORSES, TRACK_LENGTH, MAX_STEP, rng, |positions| {
        let _ = terminal.draw(|frame| race_scene::draw(frame, board, balance, positions));
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    });
    let order = finishing_order(&positions);

    terminal.draw(|frame| results_scene::draw(frame, &order))?;

    // Drop keys mashed during the race, then wait for a deliberate press
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }
    let _ = event::read()?;

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    Ok(order)
}

fn clear_screen() -> io::Result<()> {
    io::stdout()
        .execute(Clear(ClearType::All))?
        .execute(MoveTo(0, 0))?;
    Ok(())
}

/// Prints `prompt` without a newline and reads one line of input.
/// A closed stdin surfaces as an error instead of looping forever.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line)
}

/// Bet-type menu. Returns `None` when the player enters the quit token.
fn prompt_bet_type() -> io::Result<Option<BetType>> {
    println!("\nAvailable bet types:");
    for (i, bet_type) in BetType::all().iter().enumerate() {
        println!("  {}. {}", i + 1, bet_type.name());
    }
    loop {
        let line = read_line(&format!(
            "Choose bet type (1-{}), or 'q' to quit: ",
            BetType::all().len()
        ))?;
        match input::parse_bet_type(&line) {
            Some(BetTypeChoice::Choice(bet_type)) => return Ok(Some(bet_type)),
            Some(BetTypeChoice::Quit) => return Ok(None),
            None => println!("❌ Invalid selection."),
        }
    }
}

fn collect_bet(bet_type: BetType) -> io::Result<Bet> {
    match bet_type {
        BetType::Win => Ok(Bet::Win {
            horse: prompt_single_horse(bet_type)?,
        }),
        BetType::Place => Ok(Bet::Place {
            horse: prompt_single_horse(bet_type)?,
        }),
        BetType::Show => Ok(Bet::Show {
            horse: prompt_single_horse(bet_type)?,
        }),
        BetType::Exacta => {
            let first = prompt_horse(
                &format!("Select WINNER horse (1-{}): ", NUM_HORSES),
                None,
            )?;
            let second = prompt_horse(
                &format!("Select RUNNER-UP horse (1-{}): ", NUM_HORSES),
                Some(first),
            )?;
            Ok(Bet::Exacta { first, second })
        }
    }
}

fn prompt_single_horse(bet_type: BetType) -> io::Result<usize> {
    prompt_horse(
        &format!("Select Horse (1-{}) to {}: ", NUM_HORSES, bet_type.name()),
        None,
    )
}

fn prompt_horse(prompt: &str, exclude: Option<usize>) -> io::Result<usize> {
    loop {
        let line = read_line(prompt)?;
        match input::parse_horse(&line, NUM_HORSES, exclude) {
            Some(horse) => return Ok(horse),
            None => println!("❌ Invalid horse number."),
        }
    }
}

fn prompt_stake(session: &Session) -> io::Result<f64> {
    loop {
        let line = read_line(&format!(
            "Enter stake (up to $ {}): $",
            format_money(session.balance)
        ))?;
        match input::parse_stake(&line, session) {
            Some(stake) => return Ok(stake),
            None => println!("❌ Invalid stake."),
        }
    }
}

fn prompt_play_again() -> io::Result<bool> {
    let line = read_line("Play again? (y/n): ")?;
    Ok(input::is_affirmative(&line))
}
