use almanac::{DateRange, Quarter, YearQuarter};
use chrono::NaiveDate;

fn main() {
    let july: DateRange = "2012-07-01/2012-08-01".parse().expect("range");
    let release: DateRange = "2012-07-28/P7D".parse().expect("range");

    println!("july:         {july}");
    println!("release:      {release}");
    println!("overlap:      {}", july.intersection(&release).expect("connected"));
    println!("span:         {}", july.span(&release));
    println!("span days:    {}", july.span(&release).length_in_days());

    let today = NaiveDate::from_ymd_opt(2012, 7, 28).expect("date");
    let quarter = YearQuarter::from_date(today);
    println!("quarter:      {quarter} ({} days)", quarter.length_in_days());
    println!("next quarter: {}", quarter.plus_quarters(1).expect("in range"));
    println!("wrapped:      {}", Quarter::Q4.plus(1));
}
