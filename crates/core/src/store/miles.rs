//! Mileage row operations.
//!
//! Provides the increment-or-insert write path and the filtered or
//! full-listing read path over the miles table.

use super::connection::MileageDb;
use crate::Error;
use crate::input;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio_rusqlite::params;
use tokio_rusqlite::rusqlite;

/// One vehicle's cumulative mileage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleMiles {
    /// Canonical (upper-cased) vehicle name.
    pub vehicle: String,
    /// Running total, never negative.
    pub total_miles: f64,
}

impl fmt::Display for VehicleMiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.vehicle, self.total_miles)
    }
}

impl MileageDb {
    /// Add miles to a vehicle's running total.
    ///
    /// The name is canonicalized before lookup. An existing record has
    /// its total incremented in place; an unseen vehicle gets a new
    /// record seeded with `delta`. The existence check and the write are
    /// a single UPSERT statement on the connection's worker thread, so
    /// concurrent increments for the same vehicle cannot overwrite each
    /// other.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVehicle` when the name canonicalizes to the empty
    /// string, and `InvalidMileage` when `delta` is negative or not
    /// finite. Neither failure writes a row.
    pub async fn add_miles(&self, vehicle: Option<&str>, delta: f64) -> Result<(), Error> {
        let vehicle = input::normalize(vehicle);
        if vehicle.is_empty() {
            return Err(Error::InvalidVehicle("provide a vehicle name".to_string()));
        }
        if !delta.is_finite() || delta < 0.0 {
            return Err(Error::InvalidMileage(format!("expected a non-negative number of miles, got {delta}")));
        }

        tracing::debug!(vehicle = %vehicle, delta, "adding miles");

        self.conn
            .call(move |conn| -> Result<(), Error> {
                conn.execute(
                    "INSERT INTO miles (vehicle, total_miles) VALUES (?1, ?2)
                    ON CONFLICT(vehicle) DO UPDATE SET
                        total_miles = total_miles + excluded.total_miles",
                    params![vehicle, delta],
                )?;
                Ok(())
            })
            .await
            .map_err(Error::from)
    }

    /// List mileage records.
    ///
    /// The filter is canonicalized the same way stored names are, then
    /// matched exactly against the key. `None`, or a filter that
    /// canonicalizes to the empty string, returns every record ordered
    /// by vehicle name. No match yields an empty vector, never an error.
    pub async fn search(&self, filter: Option<&str>) -> Result<Vec<VehicleMiles>, Error> {
        let filter = input::normalize(filter);
        let filter = if filter.is_empty() { None } else { Some(filter) };

        self.conn
            .call(move |conn| -> Result<Vec<VehicleMiles>, Error> {
                let mut rows = Vec::new();
                match filter {
                    Some(vehicle) => {
                        let mut stmt = conn.prepare("SELECT vehicle, total_miles FROM miles WHERE vehicle = ?1")?;
                        for row in stmt.query_map(params![vehicle], row_to_miles)? {
                            rows.push(row?);
                        }
                    }
                    None => {
                        let mut stmt = conn.prepare("SELECT vehicle, total_miles FROM miles ORDER BY vehicle")?;
                        for row in stmt.query_map([], row_to_miles)? {
                            rows.push(row?);
                        }
                    }
                }
                Ok(rows)
            })
            .await
            .map_err(Error::from)
    }
}

fn row_to_miles(row: &rusqlite::Row<'_>) -> rusqlite::Result<VehicleMiles> {
    Ok(VehicleMiles { vehicle: row.get(0)?, total_miles: row.get(1)? })
}
