//! Color polling example
//!
//! This example demonstrates how to:
//! - Attach the TCS34725 (identify, power on, enable the ADC)
//! - Configure gain and integration time through the request interface
//! - Poll the four channels and print normalized RGB
//! - Power the sensor down on exit
//!
//! Usage: `read_color [I2C_DEVICE] [SAMPLES]`, defaults `/dev/i2c-1` and forever.

#[cfg(target_os = "linux")]
use linux_embedded_hal::{Delay, I2cdev};
#[cfg(target_os = "linux")]
use tcs34725::{ColorSample, Request, Response, Tcs34725};

#[cfg(target_os = "linux")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let device = args.next().unwrap_or_else(|| "/dev/i2c-1".into());
    let samples: Option<u32> = args.next().map(|n| n.parse()).transpose()?;

    let i2c = I2cdev::new(&device)?;
    let mut sensor = Tcs34725::new(i2c, Delay);

    println!("TCS34725 color polling on {device}");
    let chip = sensor.attach()?;
    println!("Found {:?} (id 0x{:02X})", chip, chip.id());

    // 60x gain, 43 integration cycles (~103ms)
    sensor.handle(Request::SetGain(0x03))?;
    sensor.handle(Request::SetIntegrationTime(0xD5))?;

    let mut taken = 0;
    while samples.map_or(true, |n| taken < n) {
        match poll(&mut sensor) {
            Ok(sample) => match sample.normalized() {
                Some(rgb) => println!(
                    "C={:5} Normalized RGB: R={} G={} B={}",
                    sample.clear, rgb.red, rgb.green, rgb.blue
                ),
                None => println!("C=0, skipping normalization to avoid division by zero."),
            },
            // A failed read only costs this sample
            Err(e) => println!("read failed: {e} (retryable: {})", e.kind().is_retryable()),
        }
        taken += 1;
        std::thread::sleep(std::time::Duration::from_millis(250));
    }

    let detached = sensor.detach();
    if let Err(e) = detached.power_down {
        println!("power-down failed: {e}");
    }
    Ok(())
}

#[cfg(target_os = "linux")]
type SensorError = tcs34725::Error<
    tcs34725::DeviceInterfaceError<<I2cdev as embedded_hal::i2c::ErrorType>::Error>,
>;

#[cfg(target_os = "linux")]
fn poll(sensor: &mut Tcs34725<tcs34725::DeviceInterface<I2cdev>, Delay>) -> Result<ColorSample, SensorError> {
    Ok(ColorSample {
        clear: read(sensor, Request::ReadClear)?,
        red: read(sensor, Request::ReadRed)?,
        green: read(sensor, Request::ReadGreen)?,
        blue: read(sensor, Request::ReadBlue)?,
    })
}

#[cfg(target_os = "linux")]
fn read(
    sensor: &mut Tcs34725<tcs34725::DeviceInterface<I2cdev>, Delay>,
    request: Request,
) -> Result<u16, SensorError> {
    match sensor.handle(request)? {
        Response::Channel(count) => Ok(count),
        Response::Configured => Err(tcs34725::Error::InvalidRequest),
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    println!("TCS34725 Color Polling Example");
    println!("This example requires Linux with I2C support.");
    println!("Replace linux-embedded-hal with your platform's HAL to adapt it.");
}
