use yarnling::*;

use std::thread;

#[test]
fn scripts_can_be_sent_between_threads() {
    let content = "\
title: Start
---
Narrator: Mont Blanc was a world-renowned mountain guide.
Narrator: He befriended thousands of climbers.
===";

    let script = read_script_from_string(content).unwrap();

    let handle = thread::spawn(move || {
        assert_eq!(script.nodes().len(), 1);
        script
    });

    let script = handle.join().unwrap();
    let line = script.get_next_line(None).unwrap();

    assert_eq!(&line.character.as_ref().unwrap().name, "Narrator");
}

#[test]
fn scripts_parsed_on_separate_threads_do_not_share_state() {
    let content = "\
title: Start
---
Bob: Hi. #line:greeting
Alice: Hello.
===";

    let handles = (0..4)
        .map(|_| thread::spawn(move || read_script_from_string(content).unwrap()))
        .collect::<Vec<_>>();

    let scripts = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();

    for script in &scripts {
        assert_eq!(script.characters().len(), 2);
        assert!(script.get_line("greeting").is_some());
    }

    assert!(scripts.windows(2).all(|pair| pair[0] == pair[1]));
}
