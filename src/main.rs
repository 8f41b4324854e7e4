// src/main.rs
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use clap::Parser;
use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, scrollable, text, Column, Row, Space};
use iced::{
    executor, theme, window, Alignment, Application, Color, Command, Element, Length, Settings,
    Subscription, Theme,
};
use log::{debug, info, warn, LevelFilter};
use rfd::AsyncFileDialog;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use sortable_table::{sortable_columns, CSVHandler, CsvOptions, DataSource, TableData, TableSorter};

mod ui;

use ui::{ButtonStyle, ContainerStyle, Styles, DARK_THEME, LIGHT_THEME};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const UPDATE_INTERVAL: Duration = Duration::from_secs(5);
const FIRST_COLUMN_WIDTH: f32 = 150.0;
const COLUMN_WIDTH: f32 = 110.0;

/// Sortable CSV table viewer. Click a header to sort by that column.
#[derive(Debug, Clone, Parser)]
#[command(name = "table_viewer", version)]
struct Cli {
    /// CSV file to open on start.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Header name to mark as sortable. Repeatable. When none is given,
    /// every header with text is clickable.
    #[arg(long = "sortable", value_name = "NAME")]
    sortable: Vec<String>,

    /// Field delimiter. Detected from the first line when omitted.
    #[arg(long)]
    delimiter: Option<char>,

    /// Start in light mode.
    #[arg(long)]
    light: bool,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            delimiter: self.delimiter.and_then(|c| u8::try_from(c).ok()),
            sortable_columns: self.sortable.clone(),
            table_id: None,
        }
    }
}

pub fn main() -> iced::Result {
    let cli = Cli::parse();
    let _ = TermLogger::init(
        cli.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let mut settings = Settings::with_flags(cli);
    settings.window = window::Settings {
        size: (1024, 768),
        resizable: true,
        ..Default::default()
    };
    TableViewer::run(settings)
}

struct TableViewer {
    is_dark_mode: bool,
    options: CsvOptions,
    data_source: Option<DataSource>,
    table: Option<TableData>,
    sorter: TableSorter,
    last_modified: Option<SystemTime>,
    status: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    ToggleTheme,
    OpenLocalFile,
    FileSelected(Option<PathBuf>),
    DataLoaded(Result<TableData, String>),
    HeaderClicked(usize),
    CheckForUpdates,
}

impl Application for TableViewer {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Cli;

    fn new(cli: Cli) -> (Self, Command<Message>) {
        let mut viewer = TableViewer {
            is_dark_mode: !cli.light,
            options: cli.csv_options(),
            data_source: None,
            table: None,
            sorter: TableSorter::new(),
            last_modified: None,
            status: None,
        };

        let command = match cli.file {
            Some(path) => viewer.open(path),
            None => Command::none(),
        };
        (viewer, command)
    }

    fn title(&self) -> String {
        format!("Table Viewer v{}", VERSION)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ToggleTheme => {
                self.is_dark_mode = !self.is_dark_mode;
                Command::none()
            }

            Message::OpenLocalFile => Command::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("CSV Files", &["csv"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FileSelected,
            ),

            Message::FileSelected(Some(path)) => self.open(path),
            Message::FileSelected(None) => Command::none(),

            Message::DataLoaded(Ok(table)) => {
                info!("showing {} rows", table.rows.len());
                self.table = Some(table);
                self.status = None;
                Command::none()
            }

            Message::DataLoaded(Err(err)) => {
                warn!("load failed: {}", err);
                self.status = Some(err);
                Command::none()
            }

            Message::HeaderClicked(column) => {
                if let Some(table) = self.table.as_mut() {
                    if let Some(direction) = self.sorter.click(table, column) {
                        debug!("column {} sorted {:?}", column, direction);
                    }
                }
                Command::none()
            }

            Message::CheckForUpdates => {
                let Some(DataSource::Local(path)) = &self.data_source else {
                    return Command::none();
                };

                let modified = fs::metadata(path).and_then(|m| m.modified()).ok();
                match (modified, self.last_modified) {
                    (Some(modified), Some(last)) if modified > last => {
                        self.last_modified = Some(modified);
                        info!("{} changed, reloading", path.display());
                        self.load(path.clone())
                    }
                    (Some(modified), None) => {
                        self.last_modified = Some(modified);
                        Command::none()
                    }
                    _ => Command::none(),
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.data_source.is_none() {
            return Subscription::none();
        }
        iced::time::every(UPDATE_INTERVAL).map(|_| Message::CheckForUpdates)
    }

    fn theme(&self) -> Theme {
        if self.is_dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn view(&self) -> Element<Message> {
        let styles = self.styles();

        let content: Element<Message> = match &self.table {
            Some(table) => self.render_table(table, styles),
            None => container(
                text("No data loaded. Open a CSV file to get started.")
                    .size(24)
                    .horizontal_alignment(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .style(theme::Container::Custom(Box::new(ContainerStyle {
                bg: styles.bg,
                fg: styles.fg,
            })))
            .into(),
        };

        let status: Element<Message> = match &self.status {
            Some(err) => text(err).size(14).style(styles.error_fg).into(),
            None => text(format!("Table Viewer v{}", VERSION))
                .size(14)
                .style(styles.footer_fg)
                .into(),
        };

        let footer = container(
            row![
                status,
                Space::with_width(Length::Fill),
                self.footer_button("Open CSV", Message::OpenLocalFile, styles),
                self.footer_button("Theme", Message::ToggleTheme, styles),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        )
        .padding(10)
        .width(Length::Fill)
        .style(theme::Container::Custom(Box::new(ContainerStyle {
            bg: styles.footer_bg,
            fg: styles.footer_fg,
        })));

        column![content, footer].into()
    }
}

impl TableViewer {
    fn styles(&self) -> &'static Styles {
        if self.is_dark_mode {
            &DARK_THEME
        } else {
            &LIGHT_THEME
        }
    }

    fn open(&mut self, path: PathBuf) -> Command<Message> {
        self.data_source = Some(DataSource::Local(path.clone()));
        self.last_modified = fs::metadata(&path).and_then(|m| m.modified()).ok();
        self.load(path)
    }

    fn load(&self, path: PathBuf) -> Command<Message> {
        let options = self.options.clone();
        Command::perform(
            async move {
                CSVHandler::with_options(options)
                    .read_csv(path)
                    .await
                    .map_err(|err| err.to_string())
            },
            Message::DataLoaded,
        )
    }

    fn render_table<'a>(&'a self, data: &'a TableData, styles: &'static Styles) -> Element<'a, Message> {
        let selectable = sortable_columns(&data.headers);

        let headers = Row::with_children(
            data.headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let label = text(&header.text).size(18);
                    let cell: Element<Message> = if selectable.contains(&i) {
                        button(label)
                            .on_press(Message::HeaderClicked(i))
                            .padding(0)
                            .style(theme::Button::Custom(Box::new(ButtonStyle {
                                bg: styles.header_bg,
                                fg: styles.header_fg,
                                hover_bg: styles.header_bg,
                            })))
                            .into()
                    } else {
                        label.into()
                    };

                    container(cell)
                        .width(column_width(i))
                        .padding(5)
                        .style(theme::Container::Custom(Box::new(ContainerStyle {
                            bg: styles.header_bg,
                            fg: styles.header_fg,
                        })))
                        .into()
                })
                .collect(),
        )
        .spacing(1);

        let rows = data.rows.iter().map(|row| {
            Row::with_children(
                row.cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        container(text(&cell.text).size(18))
                            .width(column_width(i))
                            .padding(5)
                            .style(theme::Container::Custom(Box::new(ContainerStyle {
                                bg: styles.bg,
                                fg: styles.fg,
                            })))
                            .into()
                    })
                    .collect(),
            )
            .spacing(1)
            .into()
        });

        let content = column![headers]
            .push(Column::with_children(rows.collect()))
            .spacing(1);

        container(scrollable(content).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::Container::Custom(Box::new(ContainerStyle {
                bg: styles.bg,
                fg: styles.fg,
            })))
            .into()
    }

    fn footer_button<'a>(&self, label: &str, message: Message, styles: &'static Styles) -> Element<'a, Message> {
        button(
            text(label)
                .size(16)
                .horizontal_alignment(Horizontal::Center),
        )
        .on_press(message)
        .padding(8)
        .style(theme::Button::Custom(Box::new(ButtonStyle {
            bg: styles.footer_bg,
            fg: styles.footer_fg,
            hover_bg: Color::from_rgb(0.0, 0.26, 0.5),
        })))
        .into()
    }
}

fn column_width(index: usize) -> Length {
    if index == 0 {
        Length::Fixed(FIRST_COLUMN_WIDTH)
    } else {
        Length::Fixed(COLUMN_WIDTH)
    }
}
