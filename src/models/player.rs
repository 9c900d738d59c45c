//! Race codes and the compiled-in player registry.

use serde::{Deserialize, Serialize};

/// Race of a player. Dual codes exist for players who switch between two.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Race {
    P,
    T,
    Z,
    R,
    #[serde(rename = "PT")]
    Pt,
    #[serde(rename = "ZP")]
    Zp,
    Unknown,
}

impl Race {
    /// Infer a race from a free-form hint (the part after `:` in a roster
    /// entry). First of P/T/Z/R found in the string wins; anything else is
    /// Unknown. Used only when the registry has no entry for the name.
    pub fn from_hint(hint: &str) -> Self {
        if hint.contains('P') {
            Race::P
        } else if hint.contains('T') {
            Race::T
        } else if hint.contains('Z') {
            Race::Z
        } else if hint.contains('R') {
            Race::R
        } else {
            Race::Unknown
        }
    }

    /// Short code as it appears in the dataset ("P", "PT", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Race::P => "P",
            Race::T => "T",
            Race::Z => "Z",
            Race::R => "R",
            Race::Pt => "PT",
            Race::Zp => "ZP",
            Race::Unknown => "Unknown",
        }
    }

    /// Long display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Race::P => "Protoss",
            Race::T => "Terran",
            Race::Z => "Zerg",
            Race::R => "Random",
            Race::Pt => "P/T",
            Race::Zp => "Z/P",
            Race::Unknown => "Unknown",
        }
    }
}

/// One registry entry: short handle, display name, team number, race, tier.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerMeta {
    pub id: &'static str,
    pub display_name: &'static str,
    pub team: u32,
    pub race: Race,
    pub tier: &'static str,
}

/// Look up a registry entry by short id.
pub fn player_by_id(id: &str) -> Option<&'static PlayerMeta> {
    REGISTRY.iter().find(|p| p.id == id)
}

/// Look up a registry entry by display name (exact match; the registry is
/// authoritative for race, tier and team).
pub fn player_by_name(name: &str) -> Option<&'static PlayerMeta> {
    REGISTRY.iter().find(|p| p.display_name == name)
}

/// All registry entries for one team.
pub fn players_by_team(team: u32) -> Vec<&'static PlayerMeta> {
    REGISTRY.iter().filter(|p| p.team == team).collect()
}

/// All registry entries with the given race.
pub fn players_by_race(race: Race) -> Vec<&'static PlayerMeta> {
    REGISTRY.iter().filter(|p| p.race == race).collect()
}

/// All registry entries with the given tier label.
pub fn players_by_tier(tier: &str) -> Vec<&'static PlayerMeta> {
    REGISTRY.iter().filter(|p| p.tier == tier).collect()
}

const fn meta(
    id: &'static str,
    display_name: &'static str,
    team: u32,
    race: Race,
    tier: &'static str,
) -> PlayerMeta {
    PlayerMeta {
        id,
        display_name,
        team,
        race,
        tier,
    }
}

/// The league roster. Fixed at compile time, never mutated.
pub static REGISTRY: &[PlayerMeta] = &[
    meta("Tana", "이대연", 1, Race::Z, "갓"),
    meta("Sword", "김연섭", 1, Race::T, "갓"),
    meta("Cain", "김태훈", 1, Race::P, "갓"),
    meta("WoongD", "구선웅", 1, Race::T, "휴"),
    meta("HKK", "전성민", 1, Race::Z, "휴"),
    meta("MiMiMong", "이창언", 1, Race::Z, "휴"),
    meta("KuSan", "강구산", 1, Race::Z, "애"),
    meta("ziLLeKi", "최성진", 1, Race::P, "애"),
    meta("Nucleus", "김기현", 1, Race::T, "애"),
    meta("jjabTana", "김현기", 1, Race::Z, "애"),
    meta("HD", "조항용", 1, Race::P, "애"),
    meta("Toast", "설재근", 1, Race::P, "아"),
    meta("Kensay", "이경성", 1, Race::Z, "아"),
    meta("Hillock", "강응선", 2, Race::P, "갓"),
    meta("sEpI", "김경식", 2, Race::T, "갓"),
    meta("Jenny", "박진욱", 2, Race::Z, "휴"),
    meta("rOdeO", "김재현", 2, Race::Z, "휴"),
    meta("beat", "이동규", 2, Race::Z, "휴"),
    meta("KJJ", "경제진", 2, Race::T, "휴"),
    meta("Twin", "유윤실", 2, Race::P, "애"),
    meta("Asada", "공동현", 2, Race::Z, "애"),
    meta("StyLe", "한규호", 2, Race::P, "애"),
    meta("ZirubAk", "방호석", 2, Race::Z, "애"),
    meta("SandbaG", "염규상", 2, Race::P, "애"),
    meta("Tori", "양시찬", 2, Race::P, "아"),
    meta("zoa", "서승일", 2, Race::Z, "아"),
    meta("MansaeGii", "문명훈", 3, Race::P, "갓"),
    meta("Nolg", "채원식", 3, Race::Z, "갓"),
    meta("Pooooker", "전은후", 3, Race::P, "휴"),
    meta("SSangBak", "이종열", 3, Race::T, "휴"),
    meta("wassub", "이형섭", 3, Race::P, "휴"),
    meta("Evicu", "변진황", 3, Race::P, "휴"),
    meta("G9in", "정명열", 3, Race::P, "애"),
    meta("PerfecT", "손정곤", 3, Race::T, "애"),
    meta("CibalBattle", "정현우", 3, Race::Z, "애"),
    meta("tRalala", "박지훈", 3, Race::Z, "애"),
    meta("Hjvita", "양현철", 3, Race::P, "아"),
    meta("catcat", "권노흠", 3, Race::Z, "아"),
    meta("benpro", "임병헌", 3, Race::Pt, "아"),
    meta("ShaDOw", "박재창", 4, Race::T, "갓"),
    meta("Bullfrog", "오택삼", 4, Race::Z, "갓"),
    meta("Alive", "이윤종", 4, Race::T, "갓"),
    meta("sky9898", "최상균", 4, Race::Zp, "휴"),
    meta("Sign1666", "김주한", 4, Race::P, "휴"),
    meta("Naldo", "김이헌", 4, Race::Z, "휴"),
    meta("TheMan", "조현용", 4, Race::P, "휴"),
    meta("No-Gi", "유태욱", 4, Race::Z, "애"),
    meta("Pixel", "임호진", 4, Race::T, "애"),
    meta("Goat", "김동환", 4, Race::P, "애"),
    meta("Tiempo", "이태경", 4, Race::T, "애"),
    meta("GR", "박가람", 4, Race::P, "아"),
    meta("Kakaru", "정주오", 4, Race::P, "아"),
    meta("ZZAKSSON", "김재우", 4, Race::P, "아"),
    meta("Raon", "예의현", 5, Race::P, "갓"),
    meta("HON", "장민수", 5, Race::Z, "갓"),
    meta("King", "변정식", 5, Race::Z, "휴"),
    meta("dOngkim!", "김동현", 5, Race::P, "휴"),
    meta("berrykim", "주효진", 5, Race::Z, "휴"),
    meta("Freeman", "박정진", 5, Race::P, "애"),
    meta("home", "우병진", 5, Race::Z, "애"),
    meta("gunstory", "공동건", 5, Race::Z, "애"),
    meta("casino", "이정훈", 5, Race::Pt, "애"),
    meta("Xellos", "최화용", 5, Race::T, "애"),
    meta("STeVe", "최수명", 5, Race::P, "아"),
    meta("Valc", "이재혁", 5, Race::P, "아"),
    meta("hahaha", "이윤호", 5, Race::Z, "아"),
    meta("Castle", "김종성", 6, Race::T, "갓"),
    meta("ggamak", "정용석", 6, Race::Z, "갓"),
    meta("Nope", "안태영", 6, Race::Z, "갓"),
    meta("Atta", "이봉철", 6, Race::Z, "휴"),
    meta("Panya", "조승일", 6, Race::P, "휴"),
    meta("BMC", "장승룡", 6, Race::P, "휴"),
    meta("JH", "손재현", 6, Race::Z, "휴"),
    meta("sAviOr", "권혁준", 6, Race::R, "애"),
    meta("JY", "황진영", 6, Race::Z, "애"),
    meta("SeaSee", "김태준", 6, Race::P, "애"),
    meta("glory", "황정동", 6, Race::R, "아"),
    meta("Eco", "박지호", 6, Race::P, "아"),
    meta("bradsk", "오석현", 6, Race::Z, "아"),
];
