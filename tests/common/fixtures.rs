//! Static scan-output corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of lines exactly as the scanner
//! prints them (or as a report pipeline stores them). `SAMPLE_CHECK` is the
//! reference corpus; most end-to-end assertions are written against it.

/// Raw stdout of a check run, including the preamble and warnings that the
/// capture filter is expected to drop.
pub const SAMPLE_CHECK: &[&str] = &[
    "WARNING: /etc/aide/aide.conf:42: unknown expression: @@ifhost (line: '@@ifhost build')",
    "",
    "Start timestamp: 2024-03-05 09:15:02 +0000 (AIDE 0.18.6)",
    "AIDE found differences between database and filesystem!!",
    "WARNING: cannot open /proc/1234/environ: Permission denied",
    "",
    "Summary:",
    "  Total number of entries:\t45210",
    "  Added entries:\t\t2",
    "  Removed entries:\t\t1",
    "  Changed entries:\t\t2",
    "",
    "---------------------------------------------------",
    "Added entries:",
    "---------------------------------------------------",
    "",
    "f++++++++++++++++: /etc/cron.d/backdoor",
    "d++++++++++++++++: /opt/newdir",
    "",
    "---------------------------------------------------",
    "Removed entries:",
    "---------------------------------------------------",
    "",
    "f----------------: /usr/bin/oldtool",
    "",
    "---------------------------------------------------",
    "Changed entries:",
    "---------------------------------------------------",
    "",
    "f...m.c.........: /etc/passwd",
    "f..p.s..........: /etc/shadow",
    "",
    "---------------------------------------------------",
    "Detailed information about changes:",
    "---------------------------------------------------",
    "",
    "File: /etc/passwd",
    "  Mtime     : 2024-03-01 10:00:00 +0000 | 2024-03-05 08:59:41 +0000",
    "  SHA256    : 9f86d081884c7d65 | 60303ae22b998861",
    "",
    "File: /etc/shadow",
    "  Perm      : -rw-r----- | -rw-------",
    "  Size      : 1024 | 2048",
    "",
    "---------------------------------------------------",
    "The attributes of the (uncompressed) database(s):",
    "---------------------------------------------------",
    "",
    "/var/lib/aide/aide.db",
    "  SHA256    : AbCdEfGh",
    "              IjKlMnOp",
    "  Size      : 8342211",
    "",
    "End timestamp: 2024-03-05 09:15:40 +0000 (duration: 0m 38s)",
];

/// A report some pipelines store after decoding the status flags into
/// words, with ` - ` or no separator before the path. The separator lines
/// carry a mis-decoded em dash.
pub const DECODED_REPORT: &[&str] = &[
    "Start timestamp: 2024-03-05 09:15:02",
    "Added entries: 1",
    "\u{e2}\u{20ac}\u{201d}",
    "File (Added, size) - /srv/www/index.html",
    "Removed entries: 1",
    "\u{2014}\u{2014}\u{2014}",
    "Directory (Removed) /srv/old",
    "Changed entries: 2",
    "File (Modified, permissions, checksum/content) - /etc/sudoers",
    "/etc/motd",
    "End timestamp: 2024-03-05 09:16:00",
];

/// A check run that found nothing.
pub const CLEAN_CHECK: &[&str] = &[
    "Start timestamp: 2024-03-05 03:00:01 +0000 (AIDE 0.18.6)",
    "AIDE found NO differences between database and filesystem. Looks okay!!",
    "",
    "Number of entries:\t45210",
    "",
    "End timestamp: 2024-03-05 03:00:39 +0000 (duration: 0m 38s)",
];

/// A scan configuration with selections, macros and rule groups.
pub const SAMPLE_CONF: &str = "\
# aide.conf
@@define DBDIR /var/lib/aide
database_in=file:@@{DBDIR}/aide.db
NORMAL = p+i+n+u+g+s+m+c+sha256
DIR = p+i+n+u+g
Checksums = sha256
/etc NORMAL
/bin    NORMAL
/var/log DIR
!/var/log/journal
/home/*/.ssh NORMAL
";
