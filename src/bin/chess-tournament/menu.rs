use std::{
    fmt,
    io::{self, BufRead, Write},
    process::Command,
};

/// Read one trimmed line from stdin.
///
/// # Errors
///
/// If stdin fails or closes.
fn read_line() -> anyhow::Result<String> {
    let mut buffer = String::new();
    if io::stdin().lock().read_line(&mut buffer)? == 0 {
        return Err(anyhow::Error::msg("end of input"));
    }

    Ok(buffer.trim().to_string())
}

fn prompt_marker() -> anyhow::Result<()> {
    print!("=> ");
    io::stdout().flush()?;

    Ok(())
}

/// Display a lettered menu of actions and return the one picked.
///
/// An invalid key re-prompts in place.
///
/// # Errors
///
/// If stdin fails or closes.
pub(crate) fn select_option<A: Copy>(title: &str, menu: &[(&str, A)]) -> anyhow::Result<A> {
    loop {
        println!("{title}");
        for (key, (label, _)) in ('a'..).zip(menu) {
            println!("\t[{key}] {label}");
        }
        prompt_marker()?;

        let choice = read_line()?.to_lowercase();
        let mut characters = choice.chars();
        let key = (characters.next(), characters.next());

        let selected = ('a'..)
            .zip(menu)
            .find_map(|(letter, (_, action))| (key == (Some(letter), None)).then_some(*action));

        match selected {
            Some(action) => return Ok(action),
            None => println!("Invalid action selected, please try again.\n"),
        }
    }
}

pub(crate) fn display_list<T: fmt::Display>(items: &[T]) {
    for (number, item) in (1..).zip(items) {
        println!("\t{number}- {item}");
    }
}

/// Display a numbered list and return the index picked, re-prompting until
/// the pick is valid.
///
/// # Errors
///
/// If stdin fails or closes.
pub(crate) fn select_from<T: fmt::Display>(items: &[T]) -> anyhow::Result<usize> {
    loop {
        display_list(items);
        prompt_marker()?;

        match read_line()?.parse::<usize>() {
            Ok(number) if (1..=items.len()).contains(&number) => return Ok(number - 1),
            _ => println!("Invalid choice, please try again.\n"),
        }
    }
}

/// The uniform candidate policy: no candidates is `None`, a single one is
/// taken as is, anything more asks the user.
///
/// # Errors
///
/// If stdin fails or closes.
pub(crate) fn choose_one<T: fmt::Display>(
    title: &str,
    items: &[T],
) -> anyhow::Result<Option<usize>> {
    match items.len() {
        0 => Ok(None),
        1 => Ok(Some(0)),
        _ => {
            println!("{title}");
            Ok(Some(select_from(items)?))
        }
    }
}

/// Prompt until the user enters a non-empty value.
///
/// # Errors
///
/// If stdin fails or closes.
pub(crate) fn prompt_value(label: &str) -> anyhow::Result<String> {
    loop {
        println!("{label}:");
        prompt_marker()?;

        let value = read_line()?;
        if !value.is_empty() {
            return Ok(value);
        }
    }
}

/// Prompt until the user enters an integer.
///
/// # Errors
///
/// If stdin fails or closes.
pub(crate) fn prompt_number(label: &str) -> anyhow::Result<i64> {
    loop {
        if let Ok(number) = prompt_value(label)?.parse() {
            return Ok(number);
        }

        println!("Please enter a number.\n");
    }
}

/// Wait for ENTER so listings stay on screen.
///
/// # Errors
///
/// If stdin fails.
pub(crate) fn pause() -> anyhow::Result<()> {
    println!("\nPress ENTER to continue");
    let mut buffer = String::new();
    io::stdin().lock().read_line(&mut buffer)?;

    Ok(())
}

/// # Errors
///
/// If the clear command can not run.
pub(crate) fn clear_screen() -> anyhow::Result<()> {
    #[cfg(target_family = "unix")]
    Command::new("clear").status()?;

    #[cfg(target_family = "windows")]
    Command::new("cls").status()?;

    Ok(())
}
