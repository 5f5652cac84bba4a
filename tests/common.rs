#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::core::loader::read_trips;
use bikeshare::models::TripTable;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Five Chicago-style trips, Gender and Birth Year included.
///
/// months: Jan, Jan, Mar, Jun, Jun | weekdays: Sun, Mon, Sun, Wed, Sun
/// hours: 9, 9, 17, 8, 12 | total duration 11160 s
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-01 09:07:57,2017-01-01 09:08:57,60,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1990.0
2,2017-01-02 09:10:00,2017-01-02 09:12:00,120,Canal St & Adams St,Streeter Dr & Grand Ave,Customer,Female,1985.0
3,2017-03-05 17:30:00,2017-03-05 17:33:00,180,Clinton St & Madison St,Streeter Dr & Grand Ave,Subscriber,Male,1990.0
4,2017-06-21 08:00:00,2017-06-21 09:00:00,3600,Canal St & Adams St,Clinton St & Madison St,Subscriber,,
5,2017-06-25 12:00:00,2017-06-25 14:00:00,7200,Streeter Dr & Grand Ave,Canal St & Adams St,Customer,Female,1899.0
";

/// Washington-style trips: no Gender / Birth Year columns, fractional duration.
///
/// months: Apr, May, Feb | weekdays: Fri, Sat, Tue | hours: 8, 16, 16
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-04-07 08:15:00,2017-04-07 08:25:30,630.5,Lincoln Memorial,Jefferson Memorial,Subscriber
2,2017-05-20 16:45:00,2017-05-20 17:05:00,1200,Jefferson Memorial,Lincoln Memorial,Customer
3,2017-02-14 16:05:00,2017-02-14 16:10:00,300,Lincoln Memorial,Jefferson Memorial,Subscriber
";

/// Three trips lasting 60, 120 and 180 seconds.
pub const THREE_TRIPS_CSV: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 10:00:00,60,A,B,Subscriber
2017-01-01 11:00:00,120,B,C,Subscriber
2017-01-01 12:00:00,180,C,A,Customer
";

pub fn table(csv: &str) -> TripTable {
    read_trips(csv.as_bytes()).expect("parse fixture csv")
}

/// Fresh directory inside the system temp dir, removed first if present
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Data directory with the three city files (New York reuses the Chicago rows)
pub fn setup_data_dir(name: &str) -> PathBuf {
    let dir = temp_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("new_york_city.csv"), CHICAGO_CSV).expect("write new_york_city.csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    dir
}

/// A config path that does not exist, so tests never read ~/.bikeshare
pub fn no_config(dir: &std::path::Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}
