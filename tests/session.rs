//! Whole-session behavior: exploring, collecting and accusing.
use detective_quest::*;

#[test]
fn three_clues_sustain_accusation() {
    let mut ledger = ClueLedger::new();
    let mut index = SuspectIndex::new();
    for clue in [
        "Pegadas sujas perto da janela",
        "Chave enferrujada",
        "Pegadas que levam ao portao",
    ] {
        ledger.insert(&Clue::from(clue)).unwrap();
        index.insert(&Clue::from(clue), Suspect::from("Sr. Black")).unwrap();
    }
    let count = verify(&ledger, &index, "Sr. Black");
    assert_eq!(count, 3);
    assert_eq!(Verdict::from(count), Verdict::Sustained);
}

#[test]
fn single_clue_is_insufficient() {
    let mut ledger = ClueLedger::new();
    ledger.insert(&Clue::from("Fio de tecido azul")).unwrap();
    let index = SuspectIndex::bind([("Fio de tecido azul", "Jovem Green")]).unwrap();
    let count = verify(&ledger, &index, "Jovem Green");
    assert_eq!(count, 1);
    assert_eq!(Verdict::from(count), Verdict::Insufficient);
}

#[test]
fn left_then_right_reaches_grandchild() {
    let root = mansion::layout();
    let mut ledger = ClueLedger::new();
    let mut expedition = Expedition::new(&root, &mut ledger).unwrap();
    expedition.step(Command::Go(Direction::Left)).unwrap();
    expedition.step(Command::Go(Direction::Right)).unwrap();
    assert_eq!(expedition.room().name(), "Escritorio");
    assert_eq!(expedition.route(), &[Direction::Left, Direction::Right]);
}

#[test]
fn left_then_blocked_right_stays() {
    let root = Room::new("Hall").left(Room::new("Sala").left(Room::new("Biblioteca")));
    let mut session = Session::new(root, Vec::<(&str, &str)>::new()).unwrap();
    let mut script = Script::new(["e", "d", "s"]);
    let ending = session.explore(&mut script).unwrap();
    assert_eq!(ending, Ending::Exited);
    assert!(script.events().contains(&Event::Blocked(Direction::Right)));
    let rooms = script
        .events()
        .iter()
        .filter_map(|e| match e {
            Event::Entered { room, .. } => Some(room.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(rooms, vec!["Hall", "Sala"]);
}

#[test]
fn walk_to_garden_and_accuse_black() {
    let mut session = Session::standard().unwrap();
    let mut script = Script::new(["d", "d", "d", "s", "Sr. Black\n"]);
    let ending = session.explore(&mut script).unwrap();
    assert_eq!(ending, Ending::Exited);
    assert_eq!(session.ledger().len(), 4);
    let text = script.accuse().unwrap();
    let judgement = session.accuse(&text).unwrap();
    assert_eq!(judgement.count(), 3);
    assert_eq!(judgement.verdict(), Verdict::Sustained);
}

#[test]
fn walk_to_bedroom_and_accuse_green() {
    let mut session = Session::standard().unwrap();
    let mut script = Script::new(["x", "d", "e"]);
    let ending = session.explore(&mut script).unwrap();
    assert_eq!(ending, Ending::Exhausted);
    let clues = session.ledger().iter().map(Clue::as_str).collect::<Vec<_>>();
    assert_eq!(
        clues,
        vec![
            "Fio de tecido azul",
            "Pegadas sujas perto da janela",
            "Vasilha quebrada no chao",
        ]
    );
    let judgement = session.accuse("Jovem Green").unwrap();
    assert_eq!(judgement.count(), 2);
    assert_eq!(judgement.verdict(), Verdict::Sustained);
    let judgement = session.accuse("Sr. Black").unwrap();
    assert_eq!(judgement.verdict(), Verdict::Insufficient);
}

#[test]
fn immediate_exit_keeps_hall_clue() {
    let mut session = Session::standard().unwrap();
    let ending = session.explore(&mut Script::new(["s"])).unwrap();
    assert_eq!(ending, Ending::Exited);
    assert_eq!(session.ledger().len(), 1);
    assert_eq!(session.accuse("Sr. Black").unwrap().count(), 1);
}

#[test]
fn no_input_ends_gracefully() {
    let mut session = Session::standard().unwrap();
    let mut script = Script::default();
    assert_eq!(session.explore(&mut script).unwrap(), Ending::Exhausted);
    assert_eq!(script.accuse(), None);
}

#[test]
fn empty_accusation_has_no_verdict() {
    let session = Session::standard().unwrap();
    assert!(session.accuse("\n").is_none());
    assert!(session.accuse("").is_none());
}

#[test]
fn lookups_are_stable() {
    let session = Session::standard().unwrap();
    let clue = Clue::from("Caneta com tinta vermelha");
    let first = session.index().lookup(&clue).cloned();
    for _ in 0..16 {
        assert_eq!(session.index().lookup(&clue).cloned(), first);
        assert_eq!(session.index().lookup(&Clue::from("Pegada")), None);
    }
    assert_eq!(first, Some(Suspect::from("Sra. White")));
}

#[test]
fn rebinding_overwrites() {
    let session = Session::new(
        mansion::layout(),
        [
            ("Pegadas sujas perto da janela", "Sr. Black"),
            ("Pegadas sujas perto da janela", "Prof. Plum"),
        ],
    )
    .unwrap();
    let clue = Clue::from("Pegadas sujas perto da janela");
    assert_eq!(session.index().lookup(&clue), Some(&Suspect::from("Prof. Plum")));
    assert_eq!(session.index().len(), 1);
}
