//! Built-in levels.

use glam::Vec2;

use crate::level::grid::TileGrid;
use crate::level::LevelKind;

/// Everything needed to build one level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDef {
    pub name: String,
    pub kind: LevelKind,
    /// Player position right after the build, before the first scroll.
    pub init: Vec2,
    pub rows: Vec<String>,
    /// Snow flakes scattered over the whole level area.
    pub snow_flakes: usize,
    /// Music track key handed to the audio collaborator.
    pub theme: Option<String>,
}

impl LevelDef {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, kind: LevelKind, init: Vec2, rows: &[S]) -> Self {
        Self {
            name: name.into(),
            kind,
            init,
            rows: rows.iter().map(|r| r.as_ref().to_string()).collect(),
            snow_flakes: 0,
            theme: None,
        }
    }

    pub fn with_snow(mut self, flakes: usize) -> Self {
        self.snow_flakes = flakes;
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn grid(&self) -> TileGrid {
        TileGrid::new(&self.rows)
    }
}

const DOOM_VALLEY: [&str; 21] = [
    "ffffffffffffffffffffffffffffffff",
    "fc                            cf",
    "ff  fffffffffffffffffff  c  ffff",
    "f                      flflf   f",
    "f  f                    fff    f",
    "f   ff                         f",
    "f    f        f                f",
    "f    ffff   fff                f",
    "f                              f",
    "f               p          f c f",
    "f                          fffff",
    "f              ffff     p      f",
    "f   f       f  f               f",
    "f     c    ff  f     fff ffff  f",
    "f  f ffff fff       f       f  f",
    "f c          f            f f  f",
    "f fc                c     f    f",
    "f  f              fff     f    f",
    "f               f              f",
    "f                       c f  c f",
    "ffffffffllllfffffffffffffffllflf",
];

const THE_RING: [&str; 20] = [
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    "fffffff  ffff ff               ffhhchhchhchhchhff c        cffff",
    "ff  fff  fff  ff               ffhhchhchhchhchhffcfff       cfff",
    "ff c cf  fc   ff                               ff fhh        cff",
    "ff  hhf  fhh                                                  cf",
    "ff  fff  fff                   ffhhhhhh                        f",
    "ff  fff  fff  ff            hhhffhhhhhh  hhhhhhff fhh      hhf f",
    "f             ff            hhffffhhhhh  hhhhhhffcfff      fffcf",
    "fffffff  fffffff            hffffffhhhh  hhhhhhff c          c f",
    "f       fc    ffffffff  fffffffffffffff  ffffffffffffff  fffffff",
    "f fffff fc    ffffffff  fffffffffffffff  ffffffffffffff  fffffff",
    "fcfhf h     f ff            hffffffhhhh  hhhhhhff              f",
    "fcf        ff ff            hhffffhhhhh  hhhhhhff fff      fff f",
    "fcff    f fff ff            hhhffhhhhhh  hhhhhhff fhh  s   hhf f",
    "fcf   h  c                     ffhhhhhh                        f",
    "fcff  h                                                    hhhhf",
    "ff    h    s  ff                               ff fhh      hhhff",
    "fff   f       ff               ffhhchhchhchhchhff fff      hhfff",
    "ffff  f       ff               ffhhchhchhchhchhff          hffff",
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
];

/// Snowy horizontal level. Collect ten coins to leave.
pub fn doom_valley() -> LevelDef {
    LevelDef::new("Doom Valley", LevelKind::Horizontal, Vec2::new(50.0, 900.0), &DOOM_VALLEY)
        .with_snow(50)
        .with_theme("doom_valley")
}

/// Top-down maze with gravity off.
pub fn the_ring() -> LevelDef {
    LevelDef::new("The RING", LevelKind::Plain, Vec2::new(150.0, 850.0), &THE_RING)
        .with_theme("the_ring")
}

/// All built-in levels in play order.
pub fn all() -> Vec<LevelDef> {
    vec![doom_valley(), the_ring()]
}
