use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::{Path, PathBuf};

use crate::config::Bounds;
use crate::level::Level;
use crate::parser::{self, ParserErr};
use crate::LoadLevel;

#[derive(Debug)]
pub enum LoadErr {
    NotFound(PathBuf, io::Error),
    Malformed(ParserErr),
}

impl Display for LoadErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LoadErr::NotFound(ref path, ref err) => {
                write!(f, "Can't read file {}: {}", path.display(), err)
            }
            LoadErr::Malformed(ref err) => write!(f, "Failed to parse: {}", err),
        }
    }
}

impl Error for LoadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            LoadErr::NotFound(_, ref err) => Some(err),
            LoadErr::Malformed(ref err) => Some(err),
        }
    }
}

impl From<ParserErr> for LoadErr {
    fn from(err: ParserErr) -> Self {
        LoadErr::Malformed(err)
    }
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self, bounds: &Bounds) -> Result<Level, LoadErr> {
        let path = self.as_ref();
        let text = read_file(path).map_err(|err| LoadErr::NotFound(path.to_owned(), err))?;
        let level = parser::parse(&text, bounds)?;
        debug!(
            "Loaded {}: {}x{}, {} blocks",
            path.display(),
            level.map.rows(),
            level.map.cols(),
            level.state.blocks().len()
        );
        Ok(level)
    }
}

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        match "levels/does-not-exist.txt".load_level(&Bounds::default()) {
            Err(LoadErr::NotFound(path, _)) => {
                assert_eq!(path, PathBuf::from("levels/does-not-exist.txt"))
            }
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn malformed_file() {
        match "levels/malformed-width.txt".load_level(&Bounds::default()) {
            Err(LoadErr::Malformed(ParserErr::RowWidth { row: 2, .. })) => {}
            other => panic!("expected RowWidth, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn loads_reference_level() {
        let level = "levels/reference.txt"
            .load_level(&Bounds::default())
            .unwrap();
        assert_eq!(level.map.cols(), 9);
        assert_eq!(level.map.rows(), 7);
    }
}
