//! Route plots for ackermann_local_planner
//!
//! Draws obstacle hulls, the global path and the refined poses with gnuplot.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{Hull, Path2D, Point2D, Pose2D};

pub mod colors {
    pub const OBSTACLE: &str = "#000000";
    pub const START: &str = "#00FF00";
    pub const GOAL: &str = "#0000FF";
    pub const PATH: &str = "#FF0000";
    pub const ROBOT: &str = "#00FFFF";
    pub const GLOBAL_PATH: &str = "#808080";
}

/// Line style of a plotted path
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::PATH, "Local path")
    }
}

pub struct Visualizer {
    figure: Figure,
    title: String,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        self.figure.axes2d().lines(&path.x_coords(), &path.y_coords(), &[
            Caption(&style.caption),
            Color(&style.color),
            LineWidth(style.line_width),
        ]);
        self
    }

    /// Positions of a pose sequence drawn as a path
    pub fn plot_poses(&mut self, poses: &[Pose2D], style: &PathStyle) -> &mut Self {
        self.plot_path(&Path2D::from_poses(poses), style)
    }

    /// Closed outline of every hull. Only the first one is captioned.
    pub fn plot_hulls(&mut self, hulls: &[Hull]) -> &mut Self {
        for (i, hull) in hulls.iter().enumerate() {
            let (x, y) = closed_outline(hull);
            let caption = if i == 0 { "Obstacles" } else { "" };
            self.figure.axes2d().lines(&x, &y, &[
                Caption(caption),
                Color(colors::OBSTACLE),
                LineWidth(1.5),
            ]);
        }
        self
    }

    /// Final vehicle pose with a heading tick
    pub fn plot_vehicle(&mut self, pose: &Pose2D, size: f64) -> &mut Self {
        self.plot_marker(pose.position(), colors::ROBOT, "Vehicle", size);

        let tip = heading_tip(pose, size * 0.5);
        self.figure.axes2d().lines(&[pose.x, tip.x], &[pose.y, tip.y], &[
            Color(colors::ROBOT),
            LineWidth(2.0),
        ]);
        self
    }

    pub fn plot_endpoints(&mut self, start: Point2D, goal: Point2D) -> &mut Self {
        self.plot_marker(start, colors::START, "Start", 1.5);
        self.plot_marker(goal, colors::GOAL, "Goal", 1.5)
    }

    fn plot_marker(&mut self, point: Point2D, color: &str, caption: &str, size: f64) -> &mut Self {
        self.figure.axes2d().points(&[point.x], &[point.y], &[
            Caption(caption),
            Color(color),
            PointSymbol('O'),
            PointSize(size),
        ]);
        self
    }

    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> Result<(), String> {
        let axes = self.figure.axes2d();
        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("X [m]", &[]);
        axes.set_y_label("Y [m]", &[]);
        axes.set_aspect_ratio(AutoOption::Fix(1.0));

        self.figure.save_to_png(path, width, height).map_err(|e| e.to_string())
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hull vertices with the first vertex repeated at the end
fn closed_outline(hull: &Hull) -> (Vec<f64>, Vec<f64>) {
    hull.vertices
        .iter()
        .chain(hull.vertices.first())
        .map(|p| (p.x, p.y))
        .unzip()
}

fn heading_tip(pose: &Pose2D, length: f64) -> Point2D {
    Point2D::new(pose.x + length * pose.yaw.cos(), pose.y + length * pose.yaw.sin())
}

/// Route overview: hulls, global path, refined poses and route endpoints
pub fn plot_route(hulls: &[Hull], global_path: &Path2D, poses: &[Pose2D], title: &str) -> Visualizer {
    let mut vis = Visualizer::new();
    vis.set_title(title);
    vis.plot_hulls(hulls);
    vis.plot_path(
        global_path,
        &PathStyle::new(colors::GLOBAL_PATH, "Global path").with_line_width(1.0),
    );
    vis.plot_poses(poses, &PathStyle::default());

    if let (Some(start), Some(goal)) = (global_path.points.first(), global_path.points.last()) {
        vis.plot_endpoints(*start, *goal);
    }
    if let Some(last) = poses.last() {
        vis.plot_vehicle(last, 1.0);
    }
    vis
}
