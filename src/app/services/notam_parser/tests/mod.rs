//! Tests for the NOTAM field extractor
//!
//! Fixtures below are modelled on real FAA and NAV CANADA ICAO-format text.

pub mod extractor_tests;
pub mod text_tests;

/// FAA cancellation with fields packed onto one line
pub const FAA_CANCELLATION: &str = "A1235/25 NOTAMC A1234/25\n\
Q) KZNY/QMRLC/IV/M/A/000/999/4038N07347W005\n\
A) KJFK B) 2501010000 C) 2501312359 E) RWY 04L/22R CLSD";

/// ICAO-wrapped NOTAM, one field per line, with wrapper parentheses
pub const WRAPPED_NOTAM: &str = "(A0567/25 NOTAMN\n\
Q) CZYZ/QMXLC/IV/M/A/000/999/4341N07937W005\n\
A) CYYZ\n\
B) 2503011200\n\
C) 2503152359EST\n\
D) DAILY 0400-1000\n\
E) TWY A BTN TWY B AND TWY C CLSD)";

/// Permanent NOTAM with a lowercase, spaced PERM
pub const PERM_NOTAM: &str = "B0012/25 NOTAMN\n\
Q) CZUL/QFAXX/IV/NBO/A/000/999/4528N07345W005\n\
A) CYUL B) 2502010000 C) p e r m\n\
E) AERODROME HOURS OF OPS CHANGED";

/// NOTAM without an `E)` marker: body starts after `C)`
pub const NO_BODY_MARKER: &str = "A0100/25 NOTAMN\n\
A) KBOS\n\
B) 2504010000\n\
C) 2504302359\n\
ILS RWY 04R U/S\n\
F) SFC";

/// Escaped newlines as delivered by a double-encoded JSON layer
pub const ESCAPED_NOTAM: &str =
    "A0200/25 NOTAMN\\nA) KORD\\nB) 2505010000\\nC) 2505022359\\nE) FUEL \\(JET A\\) NOT AVBL";

/// Body with stray `F)`/`G)` markers and wrapped Q-line content
pub const STRAY_LIMIT_MARKERS: &str = "A0300/25 NOTAMN\n\
Q) KZNY/QRTCA/IV/BO/W/000/050/\n\
4038N07347W010\n\
A) KJFK B) 2506010000 C) 2506302359\n\
E) TEMPORARY RESTRICTED AREA ACTIVE\n\
F) SFC\n\
G) 5000FT AMSL";
