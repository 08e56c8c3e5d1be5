//! Green Line station directory.

use std::fmt;

use super::StopCode;

/// Canonical identifier for a METRO Green Line station.
///
/// The set of stations is closed, so the directory is a plain enum: every
/// station is valid by construction and the phrase and stop-code tables are
/// total functions over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    TargetField,
    WarehouseDistrict,
    NicolletMall,
    GovernmentPlaza,
    USBankStadium,
    WestBank,
    EastBank,
    StadiumVillage,
    ProspectPark,
    Westgate,
    Raymond,
    Fairview,
    Snelling,
    Hamline,
    Lexington,
    Victoria,
    Dale,
    Western,
    CapitolRice,
    Robert,
    Tenth,
    Central,
    UnionDepot,
}

/// The per-direction NexTrip stop codes for one station.
///
/// Stations in the shared downtown/university corridor use the same code
/// for both platforms; the end-of-line stations have distinct codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopCodes {
    pub east: StopCode,
    pub west: StopCode,
}

impl StopCodes {
    const fn new(east: &'static str, west: &'static str) -> Self {
        Self {
            east: StopCode::from_static(east),
            west: StopCode::from_static(west),
        }
    }
}

impl Station {
    /// Every Green Line station, west to east.
    pub const ALL: [Station; 23] = [
        Station::TargetField,
        Station::WarehouseDistrict,
        Station::NicolletMall,
        Station::GovernmentPlaza,
        Station::USBankStadium,
        Station::WestBank,
        Station::EastBank,
        Station::StadiumVillage,
        Station::ProspectPark,
        Station::Westgate,
        Station::Raymond,
        Station::Fairview,
        Station::Snelling,
        Station::Hamline,
        Station::Lexington,
        Station::Victoria,
        Station::Dale,
        Station::Western,
        Station::CapitolRice,
        Station::Robert,
        Station::Tenth,
        Station::Central,
        Station::UnionDepot,
    ];

    /// Resolve a spoken station phrase to its station.
    ///
    /// Matching is case-insensitive and exact (no fuzzy or partial
    /// matching). Several phrases are aliases for the same station, e.g.
    /// "Hennepin Avenue" and "Warehouse District". Unknown phrases return
    /// `None` so the caller can reprompt.
    pub fn resolve(phrase: &str) -> Option<Station> {
        let station = match phrase.to_lowercase().as_str() {
            "target field" => Station::TargetField,
            "warehouse district" | "hennepin avenue" => Station::WarehouseDistrict,
            "nicollet mall" => Station::NicolletMall,
            "government plaza" => Station::GovernmentPlaza,
            "u.s. bank stadium" => Station::USBankStadium,
            "west bank" => Station::WestBank,
            "east bank" => Station::EastBank,
            "stadium village" => Station::StadiumVillage,
            "prospect park" => Station::ProspectPark,
            "west gate" => Station::Westgate,
            "raymond" => Station::Raymond,
            "fairview" => Station::Fairview,
            "snelling" => Station::Snelling,
            "hamline" => Station::Hamline,
            "lexington" => Station::Lexington,
            "victoria" => Station::Victoria,
            "dale" => Station::Dale,
            "western avenue" => Station::Western,
            "capitol rice" => Station::CapitolRice,
            "robert street" => Station::Robert,
            "tenth street" => Station::Tenth,
            "central" => Station::Central,
            "union depot" => Station::UnionDepot,
            _ => return None,
        };
        Some(station)
    }

    /// The per-direction NexTrip stop codes for this station.
    ///
    /// Pure function of the station; the mapping is fixed for the life of
    /// the process.
    pub fn stop_codes(self) -> StopCodes {
        match self {
            Station::TargetField => StopCodes::new("TF12", "TF11"),
            Station::WarehouseDistrict => StopCodes::new("WAR2", "WAR1"),
            Station::NicolletMall => StopCodes::new("5SNI", "5SNI"),
            Station::GovernmentPlaza => StopCodes::new("GOVT", "GOVT"),
            Station::USBankStadium => StopCodes::new("USB2", "USB1"),
            Station::WestBank => StopCodes::new("WEBK", "WEBK"),
            Station::EastBank => StopCodes::new("EABK", "EABK"),
            Station::StadiumVillage => StopCodes::new("STVI", "STVI"),
            Station::ProspectPark => StopCodes::new("PSPK", "PSPK"),
            Station::Westgate => StopCodes::new("WGAT", "WGAT"),
            Station::Raymond => StopCodes::new("RAST", "RAST"),
            Station::Fairview => StopCodes::new("FAUN", "FAUN"),
            Station::Snelling => StopCodes::new("SNUN", "SNUN"),
            Station::Hamline => StopCodes::new("HMUN", "HMUN"),
            Station::Lexington => StopCodes::new("LXUN", "LXUN"),
            Station::Victoria => StopCodes::new("VIUN", "VIUN"),
            Station::Dale => StopCodes::new("UNDA", "UNDA"),
            Station::Western => StopCodes::new("WEUN", "WEUN"),
            Station::CapitolRice => StopCodes::new("UNRI", "UNRI"),
            Station::Robert => StopCodes::new("ROST", "ROST"),
            Station::Tenth => StopCodes::new("10CE", "10CE"),
            Station::Central => StopCodes::new("CNST", "CNST"),
            Station::UnionDepot => StopCodes::new("UNDP", "UNDP"),
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
