use crossterm::style::Stylize;
use database::{
    entities::{courses, departments, enrolled, prerequisites, students},
    services::student::TranscriptRow,
};

/// A row that can be shown in a console table
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn optional<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn gpa(value: Option<f64>) -> String {
    value.map(|gpa| format!("{gpa:.2}")).unwrap_or_default()
}

impl TableRow for departments::Model {
    const HEADERS: &'static [&'static str] = &[
        "Department ID",
        "Department Name",
        "Dean Name",
        "Building",
        "Room",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.dept_id.clone(),
            self.dept_name.clone(),
            optional(&self.dean_name),
            optional(&self.building),
            optional(&self.room),
        ]
    }
}

impl TableRow for courses::Model {
    const HEADERS: &'static [&'static str] =
        &["Department ID", "Course ID", "Course Name", "Duration (hr)"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.dept_id.clone(),
            self.course_id.clone(),
            self.course_name.clone(),
            optional(&self.hour),
        ]
    }
}

impl TableRow for students::Model {
    const HEADERS: &'static [&'static str] = &["Student ID", "First Name", "Last Name", "GPA"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            gpa(self.gpa),
        ]
    }
}

impl TableRow for prerequisites::Model {
    const HEADERS: &'static [&'static str] =
        &["Course ID", "Course Prerequisites", "Minimum Grade"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.course_id.clone(),
            self.course_prereq_id.clone(),
            self.min_grade.to_string(),
        ]
    }
}

impl TableRow for enrolled::Model {
    const HEADERS: &'static [&'static str] =
        &["Student ID", "Course ID", "Enrollment year", "Grade"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.course_id.clone(),
            self.enrollment_year.to_string(),
            optional(&self.grade),
        ]
    }
}

impl TableRow for TranscriptRow {
    const HEADERS: &'static [&'static str] = &[
        "Student ID",
        "First Name",
        "Last Name",
        "GPA",
        "Letter Grade",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            gpa(self.gpa),
            optional(&self.letter_grade),
        ]
    }
}

/// Rows ready to print, with their column headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from result rows.
    ///
    /// # Arguments
    /// * `rows` - The rows to show
    /// * `numbered` - Prepend a 1-based "No" column
    pub fn from_rows<R: TableRow>(rows: &[R], numbered: bool) -> Self {
        let mut headers: Vec<String> = R::HEADERS.iter().map(|h| h.to_string()).collect();
        if numbered {
            headers.insert(0, "No".to_string());
        }

        let rows = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let mut cells = row.cells();
                if numbered {
                    cells.insert(0, (idx + 1).to_string());
                }
                cells
            })
            .collect();

        Self { headers, rows }
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Renders the table with box-drawing borders
    ///
    /// # Arguments
    /// * `styled` - Print headers in bold green
    pub fn render(&self, styled: bool) -> String {
        let widths = self.widths();
        let border = |left: &str, fill: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
            format!("{left}{}{right}\n", segments.join(mid))
        };
        let line = |cells: Vec<String>| {
            let padded: Vec<String> = cells
                .into_iter()
                .map(|cell| format!(" {cell} "))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };
        let pad = |cell: &str, width: usize| {
            let fill = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(fill))
        };

        let mut out = border("┌", "─", "┬", "┐");

        let headers = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, &width)| {
                let padded = pad(header, width);
                if styled {
                    padded.bold().green().to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(&line(headers));
        out.push_str(&border("├", "─", "┼", "┤"));

        for row in &self.rows {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(idx, &width)| pad(row.get(idx).map(String::as_str).unwrap_or(""), width))
                .collect();
            out.push_str(&line(cells));
        }

        out.push_str(&border("└", "─", "┴", "┘"));
        out
    }
}
