//! User-facing response texts.

pub const GREETING: &str = "[+] What's up?";
pub const CONTACT_ADDED: &str = "[+] Contact added successfully.";
pub const PHONE_CHANGED: &str = "[+] Phone number changed successfully.";
pub const NO_MATCHING_RECORDS: &str = "[-] No matching records found.";
pub const RECORD_NOT_FOUND: &str = "[-] Record not found.";
pub const DATABASE_EMPTY: &str = "[-] No records found. The Database is empty";
pub const UNRECOGNIZED_COMMAND: &str =
    "[-] Command not recognized. Please try a different command or use 'help' for assistance.";
pub const FAREWELL: &str = "\n[+] See you later, pal!";

pub const WELCOME_BANNER: &str = "Hi, I am Cortana and I am here to help! A touch of sign in here and a WiFi there... Just kidding! I am Based Assistant :)\nType in 'help' if you feel lost or press 'CTRL+C' to exit. Enough intro let's dig in...\n";

/// Rows of the help table, in display order.
pub const HELP_ENTRIES: [(&str, &str); 10] = [
    ("help", "Show help message."),
    ("add", "Add new record (ex.: 'add John 40054')."),
    ("change", "Change existing record (ex.: 'change John 30045')"),
    ("phone", "Show contact phone (ex.: 'phone John')."),
    ("show all", "Show all records."),
    ("hello", "Print a greeting"),
    ("x", "Exit"),
    ("close", "Exit"),
    ("exit", "Exit"),
    ("good bye", "Exit"),
];
