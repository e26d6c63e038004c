pub mod main;

use super::{BusOperation, Error, Lis3dh, SensorOperation, bisync, only_async, only_sync};
