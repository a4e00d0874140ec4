use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use serde::Serialize;
use ziwei_calendar::{PillarOptions, lunar_to_solar, pillars, solar_to_lunar};
use ziwei_engine::i18n::parse_gender;
use ziwei_engine::view::{AstrolabeView, HoroscopeView};
use ziwei_engine::{
    AstroType, Astrolabe, BirthDate, ChartConfig, ChartOptions, Gender, Locale, Localize,
    LunarDate, SolarDate, TimeIndex, YearDivide, ZiweiEngine,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "ZiWei Doushu chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-M-D), solar unless --lunar
    date: String,
    /// Time slot 0-12 (0 = early zi, 12 = late zi)
    #[arg(long, default_value = "0")]
    time: u8,
    /// Interpret the date as a lunar date
    #[arg(long)]
    lunar: bool,
    /// The lunar month is the leap repeat
    #[arg(long)]
    leap_month: bool,
}

#[derive(Args)]
struct ChartArgs {
    #[command(flatten)]
    birth: BirthArgs,
    /// male | female (any locale)
    #[arg(long, default_value = "male")]
    gender: String,
    /// Do not split leap months at day 15
    #[arg(long)]
    no_fix_leap: bool,
    /// heaven | earth | human
    #[arg(long, default_value = "heaven")]
    astro_type: String,
    /// zh-CN | zh-TW | en-US
    #[arg(long, default_value = "zh-CN")]
    lang: String,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a natal chart
    Chart {
        #[command(flatten)]
        chart: ChartArgs,
    },
    /// Horoscope periods of a chart at a target date
    Horoscope {
        #[command(flatten)]
        chart: ChartArgs,
        /// Target solar date (YYYY-M-D)
        #[arg(long)]
        target: String,
        /// Target time slot 0-12
        #[arg(long, conflicts_with = "target_hour")]
        target_time: Option<u8>,
        /// Target clock hour 0-23 (default 0)
        #[arg(long)]
        target_hour: Option<u32>,
    },
    /// Solar date to lunar date
    Lunar {
        /// Solar date (YYYY-M-D)
        date: String,
    },
    /// Lunar date to solar date
    Solar {
        /// Lunar date (YYYY-M-D)
        date: String,
        /// The month is the leap repeat
        #[arg(long)]
        leap_month: bool,
    },
    /// Four pillars of a solar date and time slot
    Pillars {
        /// Solar date (YYYY-M-D)
        date: String,
        /// Time slot 0-12
        #[arg(long, default_value = "0")]
        time: u8,
        /// Year boundary: exact | normal
        #[arg(long, default_value = "exact")]
        year_divide: String,
        /// Month boundary: exact | normal
        #[arg(long, default_value = "exact")]
        month_divide: String,
    },
    /// Major stars of the soul palace
    SoulStars {
        #[command(flatten)]
        birth: BirthArgs,
        /// zh-CN | zh-TW | en-US
        #[arg(long, default_value = "zh-CN")]
        lang: String,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_solar(s: &str) -> SolarDate {
    s.parse().unwrap_or_else(|e| fail(format!("Invalid date '{s}': {e}")))
}

fn parse_lunar(s: &str, is_leap: bool) -> LunarDate {
    let parts: Vec<u32> = s
        .trim()
        .split(['-', '/', '.'])
        .map(|p| p.parse().unwrap_or_else(|e| fail(format!("Invalid lunar date '{s}': {e}"))))
        .collect();
    let &[year, month, day] = parts.as_slice() else {
        fail(format!("Invalid lunar date '{s}': expected YYYY-M-D"));
    };
    LunarDate {
        year: year as i32,
        month,
        day,
        is_leap,
    }
}

fn require_time(index: u8) -> TimeIndex {
    TimeIndex::new(index).unwrap_or_else(|e| fail(format!("Invalid time slot: {e} (0-12)")))
}

fn require_gender(s: &str) -> Gender {
    parse_gender(s).unwrap_or_else(|| fail(format!("Invalid gender: {s} (male | female)")))
}

fn require_locale(s: &str) -> Locale {
    s.parse().unwrap_or_else(|e| fail(e))
}

fn parse_astro_type(s: &str) -> AstroType {
    match s.to_lowercase().as_str() {
        "heaven" | "天盘" => AstroType::Heaven,
        "earth" | "地盘" => AstroType::Earth,
        "human" | "人盘" => AstroType::Human,
        _ => fail(format!("Invalid astro type: {s} (heaven | earth | human)")),
    }
}

fn parse_year_divide(s: &str) -> YearDivide {
    match s {
        "exact" => YearDivide::Exact,
        "normal" => YearDivide::Normal,
        _ => fail(format!("Invalid divide: {s} (exact | normal)")),
    }
}

fn birth_date(args: &BirthArgs) -> BirthDate {
    if args.lunar {
        BirthDate::Lunar(parse_lunar(&args.date, args.leap_month))
    } else {
        BirthDate::Solar(parse_solar(&args.date))
    }
}

fn load_engine(config: Option<&PathBuf>) -> ZiweiEngine {
    let config = match config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format!("Failed to read {}: {e}", path.display())));
            ChartConfig::from_toml_str(&text).unwrap_or_else(|e| fail(e))
        }
        None => ChartConfig::default(),
    };
    ZiweiEngine::new(config).unwrap_or_else(|e| fail(e))
}

fn cast(engine: &ZiweiEngine, args: &ChartArgs) -> Astrolabe {
    let options = ChartOptions {
        date: birth_date(&args.birth),
        time: require_time(args.birth.time),
        gender: require_gender(&args.gender),
        fix_leap: !args.no_fix_leap,
        astro_type: parse_astro_type(&args.astro_type),
    };
    debug!("casting {options:?}");
    engine.with_options(&options).unwrap_or_else(|e| fail(e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("Failed to encode JSON: {e}")),
    }
}

fn print_chart(view: &AstrolabeView) {
    println!("Gender:     {}", view.gender);
    println!("Solar:      {}", view.solar_date);
    println!("Lunar:      {}", view.lunar_date);
    println!("Pillars:    {}", view.chinese_date);
    println!("Time:       {} ({})", view.time, view.time_range);
    println!("Sign:       {}  Zodiac: {}", view.sign, view.zodiac);
    println!(
        "Soul:       {} ({})  Body: {} ({})",
        view.earthly_branch_of_soul_palace,
        view.soul,
        view.earthly_branch_of_body_palace,
        view.body
    );
    println!("Bureau:     {}", view.five_elements_class);
    println!();
    for p in &view.palaces {
        let mark = if p.is_body_palace { "*" } else { " " };
        let stars = |list: &[ziwei_engine::view::StarView]| -> String {
            list.iter()
                .map(|s| {
                    let mut text = s.name.clone();
                    if let Some(b) = &s.brightness {
                        text.push_str(&format!("[{b}]"));
                    }
                    if let Some(m) = &s.mutagen {
                        text.push_str(&format!("<{m}>"));
                    }
                    text
                })
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!(
            "{:>2} {}{}{} {:<6}{} {:>3}-{:<3} | {} | {} | {}",
            p.index,
            p.heavenly_stem,
            p.earthly_branch,
            mark,
            p.name,
            if p.is_original_palace { "来因" } else { "" },
            p.decadal.range[0],
            p.decadal.range[1],
            stars(&p.major_stars),
            stars(&p.minor_stars),
            stars(&p.adjective_stars),
        );
    }
}

fn print_horoscope(view: &HoroscopeView) {
    println!("Target:     {} ({})", view.solar_date, view.lunar_date);
    if let Some(age) = view.age.nominal_age {
        println!("Age:        {age}");
    }
    for item in [
        &view.decadal,
        &view.age,
        &view.yearly,
        &view.monthly,
        &view.daily,
        &view.hourly,
    ] {
        println!(
            "{:<6} {:>2} {}{}  {}",
            item.name,
            item.index,
            item.heavenly_stem,
            item.earthly_branch,
            item.mutagen.join(" ")
        );
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { chart } => {
            let locale = require_locale(&chart.lang);
            let engine = load_engine(chart.config.as_ref());
            let astrolabe = cast(&engine, &chart);
            let view = AstrolabeView::from_astrolabe(&astrolabe, locale);
            if chart.json {
                print_json(&view);
            } else {
                print_chart(&view);
            }
        }

        Commands::Horoscope {
            chart,
            target,
            target_time,
            target_hour,
        } => {
            let locale = require_locale(&chart.lang);
            let engine = load_engine(chart.config.as_ref());
            let astrolabe = cast(&engine, &chart);
            let target = parse_solar(&target);
            let result = match (target_time, target_hour) {
                (_, Some(hour)) => engine.horoscope_at_hour(&astrolabe, target, hour),
                (Some(t), None) => engine.horoscope(&astrolabe, target, require_time(t)),
                (None, None) => engine.horoscope_at_hour(&astrolabe, target, 0),
            };
            let horoscope = result.unwrap_or_else(|e| fail(e));
            let view = HoroscopeView::from_horoscope(&horoscope, locale);
            if chart.json {
                print_json(&view);
            } else {
                print_horoscope(&view);
            }
        }

        Commands::Lunar { date } => {
            let solar = parse_solar(&date);
            let lunar = solar_to_lunar(solar).unwrap_or_else(|e| fail(e));
            let leap = if lunar.is_leap { " (leap)" } else { "" };
            println!("{lunar}");
            println!("{}-{}-{}{leap}", lunar.year, lunar.month, lunar.day);
        }

        Commands::Solar { date, leap_month } => {
            let lunar = parse_lunar(&date, leap_month);
            let solar = lunar_to_solar(lunar.year, lunar.month, lunar.day, lunar.is_leap)
                .unwrap_or_else(|e| fail(e));
            println!("{solar}");
        }

        Commands::Pillars {
            date,
            time,
            year_divide,
            month_divide,
        } => {
            let solar = parse_solar(&date);
            let options = PillarOptions {
                year: parse_year_divide(&year_divide),
                month: parse_year_divide(&month_divide),
            };
            let p = pillars(solar, require_time(time), options).unwrap_or_else(|e| fail(e));
            println!("Year:  {}", p.yearly);
            println!("Month: {}", p.monthly);
            println!("Day:   {}", p.daily);
            println!("Hour:  {}", p.hourly);
        }

        Commands::SoulStars { birth, lang } => {
            let locale = require_locale(&lang);
            let engine = load_engine(None);
            let time = require_time(birth.time);
            let stars = match birth_date(&birth) {
                BirthDate::Solar(d) => engine.soul_stars_by_solar(d, time, true),
                BirthDate::Lunar(d) => engine.soul_stars_by_lunar(d, time, true),
            }
            .unwrap_or_else(|e| fail(e));
            let names: Vec<String> = stars.iter().map(|s| s.localize(locale)).collect();
            println!("{}", names.join(" "));
        }
    }
}
