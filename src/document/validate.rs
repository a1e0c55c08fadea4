use std::fmt;

use crate::registry::BoardProfile;

use super::ConfigDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// The device would store a sensor the operator cannot have meant
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    /// `sensors[i].field` style path
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        };
        write!(f, "{}: {}: {}", level, self.field, self.message)
    }
}

impl ConfigDocument {
    /// Check the sensor list against a board profile.
    ///
    /// Empty sensor names are errors (the name is the one required field).
    /// Everything else is reported as a warning.
    pub fn validate(&self, profile: &BoardProfile) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (idx, sensor) in self.sensors.iter().enumerate() {
            let path = |field: &str| format!("sensors[{}].{}", idx, field);

            if sensor.name.trim().is_empty() {
                issues.push(ValidationIssue {
                    severity: IssueSeverity::Error,
                    field: path("name"),
                    message: "name is required".to_string(),
                });
            }

            if !profile.is_known_type(&sensor.sensor_type) {
                issues.push(ValidationIssue {
                    severity: IssueSeverity::Warning,
                    field: path("type"),
                    message: format!("unknown sensor type '{}'", sensor.sensor_type),
                });
                continue;
            }

            let roles = profile.pin_roles(&sensor.sensor_type);
            match &sensor.pins {
                None if !roles.is_empty() => {
                    issues.push(ValidationIssue {
                        severity: IssueSeverity::Warning,
                        field: path("pins"),
                        message: format!("missing pins, expected {}", roles.join(", ")),
                    });
                }
                None => {}
                Some(_) if roles.is_empty() => {
                    issues.push(ValidationIssue {
                        severity: IssueSeverity::Warning,
                        field: path("pins"),
                        message: format!("type '{}' takes no pins", sensor.sensor_type),
                    });
                }
                Some(pins) => {
                    for role in roles {
                        if !pins.contains_key(role) {
                            issues.push(ValidationIssue {
                                severity: IssueSeverity::Warning,
                                field: path(&format!("pins.{}", role)),
                                message: "missing pin role".to_string(),
                            });
                        }
                    }
                    for (role, id) in pins {
                        if !roles.contains(role) {
                            issues.push(ValidationIssue {
                                severity: IssueSeverity::Warning,
                                field: path(&format!("pins.{}", role)),
                                message: format!("unexpected pin role for '{}'", sensor.sensor_type),
                            });
                        } else if profile.pin_label(*id).is_none() {
                            issues.push(ValidationIssue {
                                severity: IssueSeverity::Warning,
                                field: path(&format!("pins.{}", role)),
                                message: format!("pin id {} is not on board '{}'", id, profile.name),
                            });
                        }
                    }
                }
            }
        }

        issues
    }

    pub fn has_errors(issues: &[ValidationIssue]) -> bool {
        issues.iter().any(|i| i.severity == IssueSeverity::Error)
    }
}
