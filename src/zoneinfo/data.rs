//! Embedded zone records, keyed by full name. Each value is a base64 zone record as read by
//! [`decode`](super::decode).

pub(crate) static ZONES: &[(&str, &str)] = &[
    (
        "Etc/UTC",
        "AAdFdGMvVVRDB2wAAAAAAANVVEMAAAAA",
    ),
    (
        "Etc/Rel",
        "AAdFdGMvUmVsB2wAAAAAAANSZWwAAAAA",
    ),
    (
        "America/New_York",
        "ABBBbWVyaWNhL05ld19Zb3JrB9f//7mwAANFU1QAAA4QAANFRFQCPgAIAAAcIHcKPgABAAAcIHcHw///ubAAA0VTVAAADhAAA0VEVAM+AAEAABwgdwlsAAAAABwgdwev//+5sAADRVNUAAAOEAADRURUA2wAAAAAHCB3CWwAAAAAHCB3",
    ),
    (
        "America/Chicago",
        "AA9BbWVyaWNhL0NoaWNhZ28H1///q6AAA0NTVAAADhAAA0NEVAI+AAgAABwgdwo+AAEAABwgdwfD//+roAADQ1NUAAAOEAADQ0RUAz4AAQAAHCB3CWwAAAAAHCB3B6///6ugAANDU1QAAA4QAANDRFQDbAAAAAAcIHcJbAAAAAAcIHc=",
    ),
    (
        "America/Denver",
        "AA5BbWVyaWNhL0RlbnZlcgfX//+dkAADTVNUAAAOEAADTURUAj4ACAAAHCB3Cj4AAQAAHCB3B8P//52QAANNU1QAAA4QAANNRFQDPgABAAAcIHcJbAAAAAAcIHcHr///nZAAA01TVAAADhAAA01EVANsAAAAABwgdwlsAAAAABwgdw==",
    ),
    (
        "America/Los_Angeles",
        "ABNBbWVyaWNhL0xvc19BbmdlbGVzB9f//4+AAANQU1QAAA4QAANQRFQCPgAIAAAcIHcKPgABAAAcIHcHw///j4AAA1BTVAAADhAAA1BEVAM+AAEAABwgdwlsAAAAABwgdwev//+PgAADUFNUAAAOEAADUERUA2wAAAAAHCB3CWwAAAAAHCB3",
    ),
    (
        "America/Phoenix",
        "AA9BbWVyaWNhL1Bob2VuaXgHsP//nZAAA01TVAAAAAA=",
    ),
    (
        "Europe/London",
        "AA1FdXJvcGUvTG9uZG9uB8wAAAAAAANHTVQAAA4QAANCU1QCbAAAAAAOEHUJbAAAAAAOEHU=",
    ),
    (
        "Europe/Berlin",
        "AA1FdXJvcGUvQmVybGluB8wAAA4QAANDRVQAAA4QAARDRVNUAmwAAAAADhB1CWwAAAAADhB1",
    ),
    (
        "Europe/Paris",
        "AAxFdXJvcGUvUGFyaXMHzAAADhAAA0NFVAAADhAABENFU1QCbAAAAAAOEHUJbAAAAAAOEHU=",
    ),
    (
        "Europe/Moscow",
        "AA1FdXJvcGUvTW9zY293B94AACowAANNU0sAAAAAB9sAADhAAANNU0sAAAAA",
    ),
    (
        "Asia/Tokyo",
        "AApBc2lhL1Rva3lvB6AAAH6QAANKU1QAAAAA",
    ),
    (
        "Asia/Kolkata",
        "AAxBc2lhL0tvbGthdGEHmgAATVgAA0lTVAAAAAA=",
    ),
    (
        "Asia/Shanghai",
        "AA1Bc2lhL1NoYW5naGFpB8gAAHCAAANDU1QAAAAA",
    ),
    (
        "Australia/Sydney",
        "ABBBdXN0cmFsaWEvU3lkbmV5B9gAAIygAARBRVNUAAAOEAAEQUVEVAk+AAEAABwgcwM+AAEAABwgcwfRAACMoAAEQUVTVAAADhAABEFFRFQJbAAAAAAcIHMCbAAAAAAcIHM=",
    ),
    (
        "Australia/Brisbane",
        "ABJBdXN0cmFsaWEvQnJpc2JhbmUHyQAAjKAABEFFU1QAAAAA",
    ),
    (
        "Pacific/Auckland",
        "ABBQYWNpZmljL0F1Y2tsYW5kB9gAAKjAAAROWlNUAAAOEAAETlpEVAhsAAAAABwgcwM+AAEAABwgcw==",
    ),
    (
        "Etc/GMT-14",
        "AApFdGMvR01ULTE0B2wAAMTgAAMrMTQAAAAA",
    ),
    (
        "Etc/GMT-13",
        "AApFdGMvR01ULTEzB2wAALbQAAMrMTMAAAAA",
    ),
    (
        "Etc/GMT-12",
        "AApFdGMvR01ULTEyB2wAAKjAAAMrMTIAAAAA",
    ),
    (
        "Etc/GMT-11",
        "AApFdGMvR01ULTExB2wAAJqwAAMrMTEAAAAA",
    ),
    (
        "Etc/GMT-10",
        "AApFdGMvR01ULTEwB2wAAIygAAMrMTAAAAAA",
    ),
    (
        "Etc/GMT-9",
        "AAlFdGMvR01ULTkHbAAAfpAAAyswOQAAAAA=",
    ),
    (
        "Etc/GMT-8",
        "AAlFdGMvR01ULTgHbAAAcIAAAyswOAAAAAA=",
    ),
    (
        "Etc/GMT-7",
        "AAlFdGMvR01ULTcHbAAAYnAAAyswNwAAAAA=",
    ),
    (
        "Etc/GMT-6",
        "AAlFdGMvR01ULTYHbAAAVGAAAyswNgAAAAA=",
    ),
    (
        "Etc/GMT-5",
        "AAlFdGMvR01ULTUHbAAARlAAAyswNQAAAAA=",
    ),
    (
        "Etc/GMT-4",
        "AAlFdGMvR01ULTQHbAAAOEAAAyswNAAAAAA=",
    ),
    (
        "Etc/GMT-3",
        "AAlFdGMvR01ULTMHbAAAKjAAAyswMwAAAAA=",
    ),
    (
        "Etc/GMT-2",
        "AAlFdGMvR01ULTIHbAAAHCAAAyswMgAAAAA=",
    ),
    (
        "Etc/GMT-1",
        "AAlFdGMvR01ULTEHbAAADhAAAyswMQAAAAA=",
    ),
    (
        "Etc/GMT+1",
        "AAlFdGMvR01UKzEHbP//8fAAAy0wMQAAAAA=",
    ),
    (
        "Etc/GMT+2",
        "AAlFdGMvR01UKzIHbP//4+AAAy0wMgAAAAA=",
    ),
    (
        "Etc/GMT+3",
        "AAlFdGMvR01UKzMHbP//1dAAAy0wMwAAAAA=",
    ),
    (
        "Etc/GMT+4",
        "AAlFdGMvR01UKzQHbP//x8AAAy0wNAAAAAA=",
    ),
    (
        "Etc/GMT+5",
        "AAlFdGMvR01UKzUHbP//ubAAAy0wNQAAAAA=",
    ),
    (
        "Etc/GMT+6",
        "AAlFdGMvR01UKzYHbP//q6AAAy0wNgAAAAA=",
    ),
    (
        "Etc/GMT+7",
        "AAlFdGMvR01UKzcHbP//nZAAAy0wNwAAAAA=",
    ),
    (
        "Etc/GMT+8",
        "AAlFdGMvR01UKzgHbP//j4AAAy0wOAAAAAA=",
    ),
    (
        "Etc/GMT+9",
        "AAlFdGMvR01UKzkHbP//gXAAAy0wOQAAAAA=",
    ),
    (
        "Etc/GMT+10",
        "AApFdGMvR01UKzEwB2z//3NgAAMtMTAAAAAA",
    ),
    (
        "Etc/GMT+11",
        "AApFdGMvR01UKzExB2z//2VQAAMtMTEAAAAA",
    ),
    (
        "Etc/GMT+12",
        "AApFdGMvR01UKzEyB2z//1dAAAMtMTIAAAAA",
    ),
];

/// Legacy and alternate names, mapped to the full name of the zone they stand for.
pub(crate) static ALIASES: &[(&str, &str)] = &[
    ("GMT", "Etc/UTC"),
    ("Etc/GMT", "Etc/UTC"),
    ("Etc/Zulu", "Etc/UTC"),
    ("Etc/Universal", "Etc/UTC"),
    ("US/Eastern", "America/New_York"),
    ("US/Central", "America/Chicago"),
    ("US/Mountain", "America/Denver"),
    ("US/Pacific", "America/Los_Angeles"),
    ("US/Arizona", "America/Phoenix"),
    ("Europe/Belfast", "Europe/London"),
    ("GB", "Europe/London"),
    ("W-SU", "Europe/Moscow"),
    ("Japan", "Asia/Tokyo"),
    ("Asia/Calcutta", "Asia/Kolkata"),
    ("PRC", "Asia/Shanghai"),
    ("Australia/NSW", "Australia/Sydney"),
    ("Australia/Queensland", "Australia/Brisbane"),
    ("NZ", "Pacific/Auckland"),
];
