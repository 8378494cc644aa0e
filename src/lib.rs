pub mod configuration;

pub mod holiday {
    pub mod holidayrecord;
    pub mod holidaysource;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod server {
    pub mod apierror;
    pub mod router;
}

pub mod time {
    pub mod utility;
    pub mod period;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod equinoxholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod holidaycalendarmanager;
    }

    pub mod week {
        pub mod weekerror;
        pub mod isoweek;
        pub mod weekrange;
        pub mod weekbucket;
    }
}
