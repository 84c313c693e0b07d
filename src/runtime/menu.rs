use std::io::{self, Write};

/// One entry of the numbered command menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    PlayCurrent,
    Next,
    Previous,
    Shuffle,
    CycleRepeat,
    Exit,
}

impl MenuChoice {
    /// Parse a line of user input. Anything but a bare `1`..`7` is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::View),
            2 => Some(Self::PlayCurrent),
            3 => Some(Self::Next),
            4 => Some(Self::Previous),
            5 => Some(Self::Shuffle),
            6 => Some(Self::CycleRepeat),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub fn write_menu<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, ":) MUSIC PLAYLIST MANAGER :)")?;
    writeln!(out, "1. View playlist")?;
    writeln!(out, "2. Play current song")?;
    writeln!(out, "3. Next song ->")?;
    writeln!(out, "4. Previous song <-")?;
    writeln!(out, "5. Shuffle playlist")?;
    writeln!(out, "6. Cycle repeat mode")?;
    writeln!(out, "7. Exit")?;
    write!(out, "Choose: ")?;
    out.flush()
}
